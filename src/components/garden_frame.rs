use yew::prelude::*;

use crate::glyphs::BORDER_GLYPH;

#[derive(Properties, PartialEq, Clone)]
pub struct GardenFrameProps {
    pub columns: u32,
    pub rows: u32,
    #[prop_or_default]
    pub children: Html,
}

fn border_row(count: u32) -> String {
    vec![BORDER_GLYPH; count as usize].join(" ")
}

// Decorative water frame around the tile surface.
#[function_component(GardenFrame)]
pub fn garden_frame(props: &GardenFrameProps) -> Html {
    let row = border_row(props.columns + 6);
    let side = || {
        (0..props.rows + 4)
            .map(|_| html! { <div>{ BORDER_GLYPH }</div> })
            .collect::<Html>()
    };
    html! {<div class="border-container">
        <div class="top-border">{ row.clone() }</div>
        <div class="middle-row" style="display:flex; align-items:center;">
            <div class="side-border">{ side() }</div>
            { props.children.clone() }
            <div class="side-border">{ side() }</div>
        </div>
        <div class="bottom-border">{ row }</div>
    </div>}
}
