use yew::prelude::*;

use crate::glyphs::NOTE_GLYPH;
use crate::util::navigate_to;

#[derive(Properties, PartialEq, Clone)]
pub struct NoteButtonProps {
    pub visible: bool,
    pub href: AttrValue,
}

/// Hidden control revealed by filling the four corners.
#[function_component(NoteButton)]
pub fn note_button(props: &NoteButtonProps) -> Html {
    let onclick = {
        let visible = props.visible;
        let href = props.href.clone();
        Callback::from(move |_| {
            if visible {
                navigate_to(&href);
            }
        })
    };
    html! {
        <div class={classes!("note-button", (!props.visible).then_some("hidden"))} {onclick}>
            { NOTE_GLYPH }
        </div>
    }
}
