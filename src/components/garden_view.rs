use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::glyphs::EMPTY_MARKER;
use crate::model::{GridSize, TilePos};
use crate::render::{TileBoard, TileVisual};
use crate::state::{Garden, GardenAction};
use crate::util::{clog, tile_pos_at_point, tile_pos_of_target};

#[derive(Properties, PartialEq, Clone)]
pub struct GardenViewProps {
    pub board: TileBoard,
    pub tile_px: u32,
    pub dispatcher: UseReducerDispatcher<Garden>,
}

fn first_touch_tile(e: &TouchEvent) -> Option<TilePos> {
    let t = e.touches().item(0)?;
    tile_pos_at_point(t.client_x(), t.client_y())
}

/// Mouse and touch listeners translating raw input into gesture actions.
/// Any mouse button starts a gesture. Listeners detach when dropped.
pub fn gesture_listeners(canvas: &EventTarget, on_gesture: &Callback<GardenAction>) -> Vec<EventListener> {
    let mouse = |name: &'static str, to_action: fn(&MouseEvent) -> GardenAction| {
        let cb = on_gesture.clone();
        EventListener::new(canvas, name, move |e: &Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                cb.emit(to_action(e));
            }
        })
    };
    // Non-passive so preventDefault suppresses scrolling and synthetic mouse events.
    let touch = |name: &'static str, to_action: fn(&TouchEvent) -> GardenAction| {
        let cb = on_gesture.clone();
        EventListener::new_with_options(canvas, name, EventListenerOptions::enable_prevent_default(), move |e: &Event| {
            e.prevent_default();
            if let Some(e) = e.dyn_ref::<TouchEvent>() {
                cb.emit(to_action(e));
            }
        })
    };
    vec![
        mouse("mousedown", |e| GardenAction::GestureStart(tile_pos_of_target(e.target()))),
        mouse("mousemove", |e| GardenAction::GestureMove(tile_pos_of_target(e.target()))),
        mouse("mouseup", |_| GardenAction::GestureEnd),
        mouse("mouseleave", |_| GardenAction::GestureEnd),
        touch("touchstart", |e| GardenAction::GestureStart(first_touch_tile(e))),
        touch("touchmove", |e| GardenAction::GestureMove(first_touch_tile(e))),
        touch("touchend", |_| GardenAction::GestureEnd),
        touch("touchcancel", |_| GardenAction::GestureEnd),
    ]
}

fn canvas_style(size: GridSize, tile_px: u32) -> String {
    format!(
        "display:grid; grid-template-columns:repeat({}, {}px); grid-template-rows:repeat({}, {}px); font-size:{}px; user-select:none; touch-action:none;",
        size.columns,
        tile_px,
        size.rows,
        tile_px,
        tile_px.saturating_mul(3) / 5
    )
}

#[function_component(GardenView)]
pub fn garden_view(props: &GardenViewProps) -> Html {
    let canvas_ref = use_node_ref();

    // Gesture listeners, installed once on the tile surface and removed on drop.
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.dispatcher.clone();
        use_effect_with((), move |_| {
            let on_gesture = Callback::from(move |action: GardenAction| dispatcher.dispatch(action));
            let listeners = match canvas_ref.cast::<HtmlElement>() {
                Some(canvas) => gesture_listeners(&canvas, &on_gesture),
                None => {
                    clog("garden surface not mounted; input disabled");
                    Vec::new()
                }
            };
            move || drop(listeners)
        });
    }

    let style = canvas_style(props.board.size(), props.tile_px);

    let tiles = props
        .board
        .tiles()
        .map(|(pos, visual)| {
            let (class, body) = match visual {
                TileVisual::Empty => (
                    classes!("tile"),
                    html! { <span class="tilde">{ EMPTY_MARKER }</span> },
                ),
                TileVisual::Emoji { glyph, fade_in } => (
                    classes!("tile", fade_in.then_some("fade-in")),
                    html! { { *glyph } },
                ),
            };
            html! {
                <div key={format!("{}-{}", pos.col, pos.row)} class={class}
                    data-col={pos.col.to_string()} data-row={pos.row.to_string()}>
                    { body }
                </div>
            }
        })
        .collect::<Html>();

    html! {<div ref={canvas_ref} class="canvas" style={style}>{ tiles }</div>}
}
