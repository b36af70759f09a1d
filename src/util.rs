// Browser-side helpers: console logging, navigation and tile hit-testing.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

use crate::model::TilePos;

/// Console log. A no-op off wasm so the core can log from native tests.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn navigate_to(href: &str) {
    let Some(win) = web_sys::window() else {
        clog("navigate: no window");
        return;
    };
    clog(&format!("navigate -> {}", href));
    if let Err(e) = win.location().set_href(href) {
        clog(&format!("navigate failed: {:?}", e));
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Resolves the `.tile` element containing `el` (or `el` itself) to its position.
pub fn tile_pos_of_element(el: &Element) -> Option<TilePos> {
    let tile = el.closest(".tile").ok()??;
    TilePos::from_attrs(&tile.get_attribute("data-col")?, &tile.get_attribute("data-row")?)
}

pub fn tile_pos_of_target(target: Option<EventTarget>) -> Option<TilePos> {
    let el = target?.dyn_into::<Element>().ok()?;
    tile_pos_of_element(&el)
}

/// Touch moves keep targeting the element where the touch began, so touches
/// are resolved by hit-testing the current point instead.
pub fn tile_pos_at_point(client_x: i32, client_y: i32) -> Option<TilePos> {
    let document = web_sys::window()?.document()?;
    let el = document.element_from_point(client_x as f32, client_y as f32)?;
    tile_pos_of_element(&el)
}
