use std::rc::Rc;
use yew::Reducible;

use crate::animator::{RunToken, Schedule};
use crate::config::{GardenConfig, PresetKind};
use crate::model::{GridModel, TilePos};
use crate::random::{self, SharedRng};
use crate::render::TileBoard;
use crate::util::clog;

use super::drag::DragSession;

/// Session state for one garden: occupancy, the drawn board, the current
/// gesture and the active pattern run. Created once at startup.
#[derive(Clone)]
pub struct Garden {
    pub config: Rc<GardenConfig>,
    pub grid: GridModel,
    pub board: TileBoard,
    pub drag: DragSession,
    /// Bumped by every clear; pattern callbacks from older runs are ignored.
    pub run: RunToken,
    /// Steps still to be revealed by timers for `run`.
    pub pending: Option<Rc<Schedule>>,
    pub(crate) rng: SharedRng,
}

impl Garden {
    pub fn new(config: GardenConfig) -> Self {
        Self::with_random(config, random::from_entropy())
    }

    pub fn with_random(config: GardenConfig, rng: SharedRng) -> Self {
        let size = config.grid_size();
        Self {
            config: Rc::new(config),
            grid: GridModel::new(size),
            board: TileBoard::new(size),
            drag: DragSession::Idle,
            run: RunToken::default(),
            pending: None,
            rng,
        }
    }

    pub fn is_occupied(&self, col: u32, row: u32) -> bool {
        self.grid.is_occupied(TilePos::new(col, row))
    }

    pub fn note_visible(&self) -> bool {
        self.board.note_visible()
    }

    /// Empties every tile and drops any pattern still being revealed.
    pub fn clear_garden(&mut self) {
        if self.pending.take().is_some() {
            clog(&format!("pattern run {} cancelled", self.run.0));
        }
        self.run = self.run.next();
        self.grid.clear();
        self.board.reset();
        self.refresh_note();
    }

    pub fn apply(&mut self, action: GardenAction) {
        match action {
            GardenAction::GestureStart(pos) => self.gesture_start(pos),
            GardenAction::GestureMove(pos) => self.gesture_move(pos),
            GardenAction::GestureEnd => self.gesture_end(),
            GardenAction::Clear => self.clear_garden(),
            GardenAction::PlayPreset(kind) => self.play_preset(kind),
            GardenAction::RevealStep { run, index } => {
                self.reveal_step(run, index);
            }
            GardenAction::Settle { run } => self.settle(run),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GardenAction {
    GestureStart(Option<TilePos>),
    GestureMove(Option<TilePos>),
    GestureEnd,
    Clear,
    PlayPreset(PresetKind),
    RevealStep { run: RunToken, index: usize },
    Settle { run: RunToken },
}

impl Reducible for Garden {
    type Action = GardenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            // Hovering without a button held is the common case; skip the re-render.
            GardenAction::GestureMove(_) | GardenAction::GestureEnd if !self.drag.is_active() => {
                return self;
            }
            GardenAction::RevealStep { run, .. } | GardenAction::Settle { run } if *run != self.run => {
                return self;
            }
            _ => {}
        }
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garden() -> Garden {
        Garden::with_random(GardenConfig::extended(), random::seeded(7))
    }

    #[test]
    fn idle_move_keeps_same_state() {
        let g = Rc::new(garden());
        let next = g.clone().reduce(GardenAction::GestureMove(Some(TilePos::new(1, 1))));
        assert!(Rc::ptr_eq(&g, &next));
    }

    #[test]
    fn reducer_applies_gestures() {
        let g = Rc::new(garden());
        let g = g.reduce(GardenAction::GestureStart(Some(TilePos::new(2, 3))));
        let g = g.reduce(GardenAction::GestureEnd);
        assert!(g.is_occupied(2, 3));
        assert_eq!(g.drag, DragSession::Idle);
    }

    #[test]
    fn stale_reveal_is_dropped_by_reducer() {
        let g = Rc::new(garden());
        let g = g.reduce(GardenAction::PlayPreset(PresetKind::Heart));
        let old_run = g.run;
        let g = g.reduce(GardenAction::Clear);
        let before = g.clone();
        let g = g.reduce(GardenAction::RevealStep { run: old_run, index: 0 });
        assert!(Rc::ptr_eq(&before, &g));
        assert_eq!(g.grid.occupied_count(), 0);
    }

    #[test]
    fn clear_bumps_run() {
        let mut g = garden();
        let r0 = g.run;
        g.clear_garden();
        assert_ne!(g.run, r0);
        assert!(g.pending.is_none());
    }
}
