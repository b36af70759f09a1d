//! Declarative garden setup. Both variants of the toy are instances of `GardenConfig`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GridSize;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Heart,
    CrossAndCorners,
    RandomFill,
}

impl PresetKind {
    pub fn label(self) -> &'static str {
        match self {
            PresetKind::Heart => "💖 Heart",
            PresetKind::CrossAndCorners => "🌳 Tree",
            PresetKind::RandomFill => "🎲 Random",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max_viewport_px: u32,
    pub tile_size_px: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub columns: u32,
    pub rows: u32,
    pub tile_size_px: u32,
    pub compact_breakpoints: Vec<Breakpoint>,
    /// Buttons shown under the garden, in order.
    pub presets: Vec<PresetKind>,
    pub auto_preset: Option<PresetKind>,
    pub auto_preset_delay_ms: u32,
    pub clear_button: bool,
    pub random_fill_ratio: f64,
    pub secret_href: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self::extended()
    }
}

/// Largest accepted column or row count.
pub const MAX_GRID_DIM: u32 = 256;
/// Tile sizes are clamped into this range.
pub const TILE_PX_RANGE: (u32, u32) = (8, 256);

fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint { max_viewport_px: 768, tile_size_px: 35 },
        Breakpoint { max_viewport_px: 375, tile_size_px: 32 },
    ]
}

impl GardenConfig {
    /// 10×8 free-paint garden.
    pub fn classic() -> Self {
        Self {
            columns: 10,
            rows: 8,
            tile_size_px: 60,
            compact_breakpoints: default_breakpoints(),
            presets: Vec::new(),
            auto_preset: None,
            auto_preset_delay_ms: 0,
            clear_button: false,
            random_fill_ratio: 0.45,
            secret_href: "/secret.html".into(),
        }
    }

    /// 9×9 garden with pattern buttons and the tree pattern on load.
    pub fn extended() -> Self {
        Self {
            columns: 9,
            rows: 9,
            tile_size_px: 60,
            compact_breakpoints: default_breakpoints(),
            presets: vec![PresetKind::Heart, PresetKind::CrossAndCorners, PresetKind::RandomFill],
            auto_preset: Some(PresetKind::CrossAndCorners),
            auto_preset_delay_ms: 500,
            clear_button: true,
            random_fill_ratio: 0.45,
            secret_href: "/secret.html".into(),
        }
    }

    pub fn variant(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GardenConfig = serde_json::from_str(raw)?;
        cfg.validated()
    }

    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.columns > MAX_GRID_DIM || self.rows > MAX_GRID_DIM {
            return Err(ConfigError::TooLarge {
                columns: self.columns,
                rows: self.rows,
                max: MAX_GRID_DIM,
            });
        }
        let (lo, hi) = TILE_PX_RANGE;
        self.tile_size_px = self.tile_size_px.clamp(lo, hi);
        for b in self.compact_breakpoints.iter_mut() {
            b.tile_size_px = b.tile_size_px.clamp(lo, hi);
        }
        if !self.random_fill_ratio.is_finite() {
            self.random_fill_ratio = 0.0;
        }
        self.random_fill_ratio = self.random_fill_ratio.clamp(0.0, 1.0);
        Ok(self)
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize {
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Narrowest matching breakpoint wins.
    pub fn tile_size_for_viewport(&self, viewport_px: f64) -> u32 {
        self.compact_breakpoints
            .iter()
            .filter(|b| viewport_px <= b.max_viewport_px as f64)
            .min_by_key(|b| b.max_viewport_px)
            .map(|b| b.tile_size_px)
            .unwrap_or(self.tile_size_px)
    }

    /// Number of tiles the random fill marks.
    pub fn random_fill_count(&self) -> usize {
        let total = self.grid_size().tile_count();
        ((total as f64) * self.random_fill_ratio).round() as usize
    }
}

impl GardenConfig {
    /// Startup lookup: inline `#garden-config` JSON, then `?variant=`, then `extended()`.
    pub fn from_page() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let inline = win
            .document()
            .and_then(|d| d.get_element_by_id("garden-config"))
            .and_then(|el| el.text_content())
            .filter(|raw| !raw.trim().is_empty());
        if let Some(raw) = inline {
            match Self::from_json(&raw) {
                Ok(cfg) => {
                    clog("garden config: inline json");
                    return cfg;
                }
                Err(e) => clog(&e.to_string()),
            }
        }
        let variant = win
            .location()
            .search()
            .ok()
            .and_then(|s| web_sys::UrlSearchParams::new_with_str(&s).ok())
            .and_then(|params| params.get("variant"));
        if let Some(name) = variant {
            match Self::variant(&name) {
                Some(cfg) => {
                    clog(&format!("garden config: variant {}", name));
                    return cfg;
                }
                None => clog(&format!("unknown garden variant '{}'", name)),
            }
        }
        Self::default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid garden config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("garden must have at least one tile (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("garden of {columns}x{rows} exceeds {max} tiles per side")]
    TooLarge { columns: u32, rows: u32, max: u32 },
}
