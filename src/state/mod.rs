pub mod drag;
pub mod garden;

pub use drag::{DragAction, DragSession};
pub use garden::{Garden, GardenAction};
