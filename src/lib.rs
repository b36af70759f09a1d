//! Emoji garden: paint flowers onto a small grid by clicking or dragging,
//! or let a preset pattern grow on its own.
//!
//! The core (`model`, `interaction`, `animator`, `patterns`, `easter_egg`)
//! is plain Rust and runs natively in tests; `components` is the yew front.

pub mod animator;
pub mod components;
pub mod config;
pub mod easter_egg;
pub mod glyphs;
pub mod interaction;
pub mod model;
pub mod patterns;
pub mod random;
pub mod render;
pub mod state;
pub mod util;

pub use config::{GardenConfig, PresetKind};
pub use model::{GridModel, GridSize, TilePos};
pub use state::{Garden, GardenAction};
