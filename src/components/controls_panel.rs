use yew::prelude::*;

use crate::config::PresetKind;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub presets: Vec<PresetKind>,
    pub clear_button: bool,
    pub on_preset: Callback<PresetKind>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    if props.presets.is_empty() && !props.clear_button {
        return html! {};
    }
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let preset_buttons = props
        .presets
        .iter()
        .map(|&kind| {
            let cb = props.on_preset.clone();
            let onclick = Callback::from(move |_| cb.emit(kind));
            html! { <button class="garden-button" {onclick}>{ kind.label() }</button> }
        })
        .collect::<Html>();
    html! {<div class="garden-controls" style="display:flex; flex-wrap:wrap; justify-content:center; gap:8px; margin-top:12px;">
        { preset_buttons }
        { if props.clear_button { html!{ <button class="garden-button" onclick={clear_cb}>{"🧹 Clear"}</button> } } else { html!{} } }
    </div>}
}
