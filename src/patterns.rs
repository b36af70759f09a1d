//! Pattern generators feeding the animator.

use crate::animator::Placement;
use crate::config::{GardenConfig, PresetKind};
use crate::glyphs::GlyphSet;
use crate::model::GridSize;
use rand::Rng;
use rand::seq::SliceRandom;

pub const HEART_STEP_MS: u32 = 80;
pub const CROSS_STEP_MS: u32 = 100;

/// Heart silhouette laid out for a 9×9 garden.
#[rustfmt::skip]
const HEART_CELLS: &[(i32, i32)] = &[
    (1, 1), (2, 1), (6, 1), (7, 1),
    (0, 2), (1, 2), (2, 2), (3, 2), (5, 2), (6, 2), (7, 2), (8, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3), (8, 3),
    (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4),
    (2, 5), (3, 5), (4, 5), (5, 5), (6, 5),
    (3, 6), (4, 6), (5, 6),
    (4, 7),
];

pub fn heart() -> Vec<Placement> {
    HEART_CELLS
        .iter()
        .map(|&(col, row)| Placement::new(col, row, GlyphSet::HeartFlowers))
        .collect()
}

/// A tree "+" in the middle and a three-flower block tucked into each corner.
pub fn cross_and_corners(size: GridSize) -> Vec<Placement> {
    let cx = (size.columns / 2) as i32;
    let cy = (size.rows / 2) as i32;
    let mut out: Vec<Placement> = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)]
        .iter()
        .map(|&(dx, dy)| Placement::new(cx + dx, cy + dy, GlyphSet::Tree))
        .collect();

    let last_col = size.columns as i32 - 1;
    let last_row = size.rows as i32 - 1;
    // (corner, inward step)
    let corners = [
        ((0, 0), (1, 1)),
        ((last_col, 0), (-1, 1)),
        ((0, last_row), (1, -1)),
        ((last_col, last_row), (-1, -1)),
    ];
    for ((x, y), (dx, dy)) in corners {
        for (ox, oy) in [(0, 0), (dx, 0), (0, dy)] {
            out.push(Placement::new(x + ox, y + oy, GlyphSet::CornerFlowers));
        }
    }
    out
}

/// `count` distinct tiles drawn without repetition.
pub fn random_fill<R: Rng + ?Sized>(size: GridSize, count: usize, rng: &mut R) -> Vec<Placement> {
    let mut cells: Vec<(i32, i32)> = size
        .positions()
        .map(|p| (p.col as i32, p.row as i32))
        .collect();
    cells.shuffle(rng);
    cells
        .into_iter()
        .take(count)
        .map(|(col, row)| Placement::new(col, row, GlyphSet::Garden))
        .collect()
}

/// Placements and step delay for a preset button.
pub fn preset_placements<R: Rng + ?Sized>(
    kind: PresetKind,
    config: &GardenConfig,
    rng: &mut R,
) -> (Vec<Placement>, u32) {
    match kind {
        PresetKind::Heart => (heart(), HEART_STEP_MS),
        PresetKind::CrossAndCorners => (cross_and_corners(config.grid_size()), CROSS_STEP_MS),
        PresetKind::RandomFill => (
            random_fill(config.grid_size(), config.random_fill_count(), rng),
            0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const NINE: GridSize = GridSize { columns: 9, rows: 9 };

    #[test]
    fn heart_fits_nine_by_nine_and_leaves_corners() {
        let cells = heart();
        assert!(cells.iter().all(|p| NINE.contains(p.col, p.row)));
        let unique: HashSet<(i32, i32)> = cells.iter().map(|p| (p.col, p.row)).collect();
        assert_eq!(unique.len(), cells.len());
        for (c, r) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert!(!unique.contains(&(c, r)));
        }
    }

    #[test]
    fn cross_and_corners_layout() {
        let cells = cross_and_corners(NINE);
        assert_eq!(cells.len(), 17);
        let trees: HashSet<(i32, i32)> = cells
            .iter()
            .filter(|p| p.glyphs == GlyphSet::Tree)
            .map(|p| (p.col, p.row))
            .collect();
        let expected: HashSet<(i32, i32)> = [(4, 4), (3, 4), (5, 4), (4, 3), (4, 5)].into_iter().collect();
        assert_eq!(trees, expected);
        let flowers: HashSet<(i32, i32)> = cells
            .iter()
            .filter(|p| p.glyphs == GlyphSet::CornerFlowers)
            .map(|p| (p.col, p.row))
            .collect();
        assert_eq!(flowers.len(), 12);
        for c in [(0, 0), (1, 0), (0, 1), (8, 0), (7, 0), (8, 1), (0, 8), (1, 8), (0, 7), (8, 8), (7, 8), (8, 7)] {
            assert!(flowers.contains(&c), "missing corner flower at {:?}", c);
        }
    }

    #[test]
    fn random_fill_draws_distinct_tiles() {
        let mut rng = StdRng::seed_from_u64(12);
        let cells = random_fill(NINE, 36, &mut rng);
        assert_eq!(cells.len(), 36);
        let unique: HashSet<(i32, i32)> = cells.iter().map(|p| (p.col, p.row)).collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn preset_delays() {
        let cfg = GardenConfig::extended();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(preset_placements(PresetKind::Heart, &cfg, &mut rng).1, 80);
        assert_eq!(preset_placements(PresetKind::CrossAndCorners, &cfg, &mut rng).1, 100);
        let (cells, delay) = preset_placements(PresetKind::RandomFill, &cfg, &mut rng);
        assert_eq!((cells.len(), delay), (36, 0));
    }
}
