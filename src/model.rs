//! Grid occupancy for the garden.
//! Occupancy is a presence map keyed by tile position; absent keys read as empty.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    pub fn tile_count(self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    /// Signed bounds check, used for pattern descriptors that may point off-grid.
    pub fn contains(self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as u32) < self.columns && (row as u32) < self.rows
    }

    /// Row-major iteration over every tile position.
    pub fn positions(self) -> impl Iterator<Item = TilePos> {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| TilePos { col, row }))
    }

    pub fn corners(self) -> [TilePos; 4] {
        let last_col = self.columns.saturating_sub(1);
        let last_row = self.rows.saturating_sub(1);
        [
            TilePos { col: 0, row: 0 },
            TilePos { col: last_col, row: 0 },
            TilePos { col: 0, row: last_row },
            TilePos { col: last_col, row: last_row },
        ]
    }
}

/// Presence key: one per (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePos {
    pub col: u32,
    pub row: u32,
}

impl TilePos {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parses the `data-col` / `data-row` attribute pair written on each tile element.
    pub fn from_attrs(col: &str, row: &str) -> Option<Self> {
        Some(Self {
            col: col.trim().parse().ok()?,
            row: row.trim().parse().ok()?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    size: GridSize,
    /// Keys exist only for tiles touched at least once.
    occupied: HashMap<TilePos, bool>,
}

impl GridModel {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            occupied: HashMap::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn in_bounds(&self, pos: TilePos) -> bool {
        pos.col < self.size.columns && pos.row < self.size.rows
    }

    pub fn is_occupied(&self, pos: TilePos) -> bool {
        self.occupied.get(&pos).copied().unwrap_or(false)
    }

    /// Out-of-range writes are ignored.
    pub fn set_occupied(&mut self, pos: TilePos, value: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        self.occupied.insert(pos, value);
    }

    /// Resets every stored flag to false; keys stay, the map is not reallocated.
    pub fn clear(&mut self) {
        for flag in self.occupied.values_mut() {
            *flag = false;
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.values().filter(|v| **v).count()
    }
}
