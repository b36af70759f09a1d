// Corner watcher: the note control shows exactly when all four corners hold an emoji.

use crate::model::GridModel;
use crate::render::Surface;
use crate::state::Garden;
use crate::util::clog;

pub fn all_corners_occupied(grid: &GridModel) -> bool {
    grid.size().corners().iter().all(|p| grid.is_occupied(*p))
}

impl Garden {
    /// Sets note visibility from current occupancy. Always writes, never toggles.
    pub fn refresh_note(&mut self) {
        let visible = all_corners_occupied(&self.grid);
        if visible != self.board.note_visible() {
            clog(if visible { "note revealed" } else { "note hidden" });
        }
        self.board.set_note_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridSize, TilePos};

    #[test]
    fn needs_all_four_corners() {
        let mut g = GridModel::new(GridSize { columns: 9, rows: 9 });
        let corners = [TilePos::new(0, 0), TilePos::new(8, 0), TilePos::new(0, 8), TilePos::new(8, 8)];
        for (i, c) in corners.iter().enumerate() {
            assert!(!all_corners_occupied(&g), "visible after {} corners", i);
            g.set_occupied(*c, true);
        }
        assert!(all_corners_occupied(&g));
        for c in corners {
            g.set_occupied(c, false);
            assert!(!all_corners_occupied(&g));
            g.set_occupied(c, true);
        }
    }

    #[test]
    fn single_tile_grid_has_one_corner() {
        let mut g = GridModel::new(GridSize { columns: 1, rows: 1 });
        g.set_occupied(TilePos::new(0, 0), true);
        assert!(all_corners_occupied(&g));
    }
}
