use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, garden_frame::GardenFrame, garden_view::GardenView,
    note_button::NoteButton,
};
use crate::animator::RunToken;
use crate::config::{GardenConfig, PresetKind};
use crate::state::{Garden, GardenAction};
use crate::util::{clog, viewport_width};

#[function_component(App)]
pub fn app() -> Html {
    let garden = use_reducer(|| Garden::new(GardenConfig::from_page()));
    let config = garden.config.clone();

    // Viewport is read once; resizing later does not rescale the tiles.
    let tile_px = {
        let config = config.clone();
        use_state(move || {
            viewport_width()
                .map(|w| config.tile_size_for_viewport(w))
                .unwrap_or(config.tile_size_px)
        })
    };

    // Pattern timers for the current run. A new run (clear or another
    // pattern) runs the cleanup first, which drops and so cancels the old ones.
    {
        let dispatcher = garden.dispatcher();
        let pending = garden.pending.clone();
        use_effect_with(garden.run, move |run: &RunToken| {
            let mut timeouts: Vec<Timeout> = Vec::new();
            if let Some(schedule) = pending.filter(|s| s.run == *run) {
                for (index, step) in schedule.steps.iter().enumerate() {
                    let d = dispatcher.clone();
                    let run = schedule.run;
                    timeouts.push(Timeout::new(step.at_ms, move || {
                        d.dispatch(GardenAction::RevealStep { run, index });
                    }));
                }
                let d = dispatcher.clone();
                let run = schedule.run;
                timeouts.push(Timeout::new(schedule.settle_at_ms, move || {
                    d.dispatch(GardenAction::Settle { run });
                }));
            }
            move || drop(timeouts)
        });
    }

    // One-shot preset shortly after the first render.
    {
        let dispatcher = garden.dispatcher();
        let auto = config.auto_preset;
        let delay = config.auto_preset_delay_ms;
        use_effect_with((), move |_| {
            let timeout = auto.map(|kind| {
                clog(&format!("auto preset {:?} in {}ms", kind, delay));
                Timeout::new(delay, move || dispatcher.dispatch(GardenAction::PlayPreset(kind)))
            });
            move || drop(timeout)
        });
    }

    let on_preset = {
        let dispatcher = garden.dispatcher();
        Callback::from(move |kind: PresetKind| dispatcher.dispatch(GardenAction::PlayPreset(kind)))
    };
    let on_clear = {
        let dispatcher = garden.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(GardenAction::Clear))
    };

    html! {<div class="garden-app" style="display:flex; flex-direction:column; align-items:center;">
        <GardenFrame columns={config.columns} rows={config.rows}>
            <GardenView board={garden.board.clone()} tile_px={*tile_px} dispatcher={garden.dispatcher()} />
        </GardenFrame>
        <ControlsPanel presets={config.presets.clone()} clear_button={config.clear_button} {on_preset} {on_clear} />
        <NoteButton visible={garden.note_visible()} href={AttrValue::from(config.secret_href.clone())} />
    </div>}
}
