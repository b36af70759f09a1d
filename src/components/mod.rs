pub mod app;
pub mod controls_panel;
pub mod garden_frame;
pub mod garden_view;
pub mod note_button;

pub use app::App;
