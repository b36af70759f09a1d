use serde::{Deserialize, Serialize};

pub const EMPTY_MARKER: &str = "~";
pub const NOTE_GLYPH: &str = "📝";
pub const BORDER_GLYPH: &str = "𓈈";

/// Flowers and plants used for free painting and the random fill.
/// Some entries repeat on purpose so they come up more often.
pub const GARDEN: &[&str] = &[
    "🌱", "🌿", "🍀", "☘️", "🌾", "🌵", "🌴", "🌳", "🌲", "🌷", "🌸", "🌺", "🌻", "🌼", "🌹", "🥀",
    "🏵️", "💐", "🌰", "🍄", "🌷", "🌸", "🌻", "🌺",
];

pub const HEART_FLOWERS: &[&str] = &["🌸", "🌺", "🌷"];

pub const TREE: &[&str] = &["🌳"];

pub const CORNER_FLOWERS: &[&str] = &["🌷", "🌸", "🌺", "🌻", "🌼", "🌹"];

/// Named glyph table, so placements stay `Copy` and configs can refer to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSet {
    Garden,
    HeartFlowers,
    Tree,
    CornerFlowers,
}

impl GlyphSet {
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            GlyphSet::Garden => GARDEN,
            GlyphSet::HeartFlowers => HEART_FLOWERS,
            GlyphSet::Tree => TREE,
            GlyphSet::CornerFlowers => CORNER_FLOWERS,
        }
    }
}
