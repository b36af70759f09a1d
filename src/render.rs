//! Tile visuals. `TileBoard` is the view-side surface the yew components draw from.

use crate::glyphs::EMPTY_MARKER;
use crate::model::{GridSize, TilePos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileVisual {
    Empty,
    Emoji {
        glyph: &'static str,
        /// Revealed by a pattern; drawn with the fade-in class.
        fade_in: bool,
    },
}

impl TileVisual {
    pub fn text(&self) -> &'static str {
        match self {
            TileVisual::Empty => EMPTY_MARKER,
            TileVisual::Emoji { glyph, .. } => glyph,
        }
    }
}

/// What the core needs from a rendering surface.
pub trait Surface {
    fn render_empty(&mut self, pos: TilePos);
    fn render_emoji(&mut self, pos: TilePos, glyph: &'static str, fade_in: bool);
    fn set_note_visible(&mut self, visible: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBoard {
    size: GridSize,
    /// Row-major; length = columns * rows.
    tiles: Vec<TileVisual>,
    note_visible: bool,
}

impl TileBoard {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            tiles: vec![TileVisual::Empty; size.tile_count()],
            note_visible: false,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        if pos.col < self.size.columns && pos.row < self.size.rows {
            Some(pos.row as usize * self.size.columns as usize + pos.col as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, pos: TilePos) -> Option<&TileVisual> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn tiles(&self) -> impl Iterator<Item = (TilePos, &TileVisual)> {
        self.size.positions().zip(self.tiles.iter())
    }

    pub fn note_visible(&self) -> bool {
        self.note_visible
    }

    pub fn reset(&mut self) {
        for t in self.tiles.iter_mut() {
            *t = TileVisual::Empty;
        }
    }
}

impl Surface for TileBoard {
    fn render_empty(&mut self, pos: TilePos) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = TileVisual::Empty;
        }
    }

    fn render_emoji(&mut self, pos: TilePos, glyph: &'static str, fade_in: bool) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = TileVisual::Emoji { glyph, fade_in };
        }
    }

    fn set_note_visible(&mut self, visible: bool) {
        self.note_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_replaces_marker_and_back() {
        let mut b = TileBoard::new(GridSize { columns: 3, rows: 2 });
        let p = TilePos::new(2, 1);
        assert_eq!(b.tile(p).map(TileVisual::text), Some("~"));
        b.render_emoji(p, "🌻", false);
        assert_eq!(b.tile(p).map(TileVisual::text), Some("🌻"));
        b.render_emoji(p, "🌷", true);
        assert_eq!(b.tile(p), Some(&TileVisual::Emoji { glyph: "🌷", fade_in: true }));
        b.render_empty(p);
        assert_eq!(b.tile(p), Some(&TileVisual::Empty));
    }

    #[test]
    fn tiles_iterate_row_major() {
        let b = TileBoard::new(GridSize { columns: 2, rows: 2 });
        let order: Vec<TilePos> = b.tiles().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![TilePos::new(0, 0), TilePos::new(1, 0), TilePos::new(0, 1), TilePos::new(1, 1)]
        );
    }

    #[test]
    fn off_board_render_is_ignored() {
        let mut b = TileBoard::new(GridSize { columns: 2, rows: 2 });
        b.render_emoji(TilePos::new(5, 5), "🌻", false);
        assert!(b.tiles().all(|(_, t)| *t == TileVisual::Empty));
    }
}
