//! Timed reveal of pattern placements.
//!
//! A pattern is turned into a `Schedule`: placements sorted top-to-bottom,
//! left-to-right, step `i` due at `i * delay_ms`, and one corner check shortly
//! after the last step. The view owns the actual timers and feeds due steps
//! back as `GardenAction::RevealStep`; every schedule is tagged with the
//! `RunToken` of the run that produced it so late callbacks can be told apart.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::config::PresetKind;
use crate::glyphs::GlyphSet;
use crate::model::{GridSize, TilePos};
use crate::patterns;
use crate::random;
use crate::render::Surface;
use crate::state::Garden;
use crate::util::clog;

/// Extra wait after the last step before the corner check runs.
pub const SETTLE_DELAY_MS: u32 = 50;

/// One target of a pattern. Coordinates are signed so off-grid entries can be
/// expressed and skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub col: i32,
    pub row: i32,
    pub glyphs: GlyphSet,
}

impl Placement {
    pub fn new(col: i32, row: i32, glyphs: GlyphSet) -> Self {
        Self { col, row, glyphs }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunToken(pub u64);

impl RunToken {
    pub fn next(self) -> Self {
        RunToken(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at_ms: u32,
    pub pos: TilePos,
    pub glyphs: GlyphSet,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub run: RunToken,
    pub steps: Vec<ScheduledStep>,
    pub settle_at_ms: u32,
}

pub fn build_schedule(run: RunToken, size: GridSize, placements: &[Placement], delay_ms: u32) -> Schedule {
    let mut sorted = placements.to_vec();
    sorted.sort_by_key(|p| (p.row, p.col));
    let steps: Vec<ScheduledStep> = sorted
        .into_iter()
        .filter(|p| size.contains(p.col, p.row))
        .enumerate()
        .map(|(i, p)| ScheduledStep {
            at_ms: (i as u32).saturating_mul(delay_ms),
            pos: TilePos::new(p.col as u32, p.row as u32),
            glyphs: p.glyphs,
        })
        .collect();
    let last = steps.last().map(|s| s.at_ms).unwrap_or(0);
    Schedule {
        run,
        steps,
        settle_at_ms: last.saturating_add(SETTLE_DELAY_MS),
    }
}

impl Garden {
    /// Clears the garden, then starts revealing `placements`. A zero delay
    /// applies everything at once and checks the corners immediately.
    pub fn start_pattern(&mut self, placements: &[Placement], delay_ms: u32) -> RunToken {
        self.clear_garden();
        let schedule = build_schedule(self.run, self.grid.size(), placements, delay_ms);
        if delay_ms == 0 {
            for step in &schedule.steps {
                self.apply_step(step);
            }
            self.refresh_note();
        } else {
            clog(&format!(
                "pattern run {}: {} steps every {}ms",
                self.run.0,
                schedule.steps.len(),
                delay_ms
            ));
            self.pending = Some(Rc::new(schedule));
        }
        self.run
    }

    pub fn play_preset(&mut self, kind: PresetKind) {
        let (placements, delay_ms) = {
            let mut rng = self.rng.borrow_mut();
            patterns::preset_placements(kind, &self.config, &mut *rng)
        };
        self.start_pattern(&placements, delay_ms);
    }

    /// Applies step `index` of the pending schedule. Returns false for a stale
    /// run or an unknown step.
    pub fn reveal_step(&mut self, run: RunToken, index: usize) -> bool {
        if run != self.run {
            return false;
        }
        let Some(step) = self.pending.as_ref().and_then(|s| s.steps.get(index)).cloned() else {
            return false;
        };
        self.apply_step(&step);
        true
    }

    pub fn settle(&mut self, run: RunToken) {
        if run != self.run {
            return;
        }
        self.pending = None;
        self.refresh_note();
    }

    fn apply_step(&mut self, step: &ScheduledStep) {
        if !self.grid.in_bounds(step.pos) {
            return;
        }
        let glyph = random::pick(&mut *self.rng.borrow_mut(), step.glyphs.glyphs());
        let Some(glyph) = glyph else {
            return;
        };
        self.grid.set_occupied(step.pos, true);
        self.board.render_emoji(step.pos, glyph, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GardenConfig;
    use crate::random;
    use crate::render::TileVisual;

    const NINE: GridSize = GridSize { columns: 9, rows: 9 };

    fn garden() -> Garden {
        Garden::with_random(GardenConfig::extended(), random::seeded(7))
    }

    #[test]
    fn steps_are_sorted_by_row_then_column() {
        let placements = [
            Placement::new(5, 2, GlyphSet::Tree),
            Placement::new(1, 0, GlyphSet::Tree),
            Placement::new(3, 0, GlyphSet::Tree),
        ];
        let s = build_schedule(RunToken(1), NINE, &placements, 100);
        let order: Vec<(TilePos, u32)> = s.steps.iter().map(|st| (st.pos, st.at_ms)).collect();
        assert_eq!(
            order,
            vec![(TilePos::new(1, 0), 0), (TilePos::new(3, 0), 100), (TilePos::new(5, 2), 200)]
        );
        assert_eq!(s.settle_at_ms, 200 + SETTLE_DELAY_MS);
    }

    #[test]
    fn off_grid_placements_are_skipped() {
        let placements = [
            Placement::new(-1, 0, GlyphSet::Tree),
            Placement::new(9, 0, GlyphSet::Tree),
            Placement::new(0, 9, GlyphSet::Tree),
        ];
        let s = build_schedule(RunToken(0), NINE, &placements, 80);
        assert!(s.steps.is_empty());
        assert_eq!(s.settle_at_ms, SETTLE_DELAY_MS);
    }

    #[test]
    fn staggered_pattern_waits_for_timers() {
        let mut g = garden();
        let run = g.start_pattern(&[Placement::new(2, 2, GlyphSet::Tree)], 100);
        assert_eq!(g.grid.occupied_count(), 0);
        assert!(g.reveal_step(run, 0));
        assert!(g.is_occupied(2, 2));
        assert_eq!(
            g.board.tile(TilePos::new(2, 2)),
            Some(&TileVisual::Emoji { glyph: "🌳", fade_in: true })
        );
        assert!(!g.reveal_step(run, 1));
    }

    #[test]
    fn zero_delay_applies_at_once() {
        let mut g = garden();
        g.start_pattern(
            &[
                Placement::new(0, 0, GlyphSet::Tree),
                Placement::new(8, 0, GlyphSet::Tree),
                Placement::new(0, 8, GlyphSet::Tree),
                Placement::new(8, 8, GlyphSet::Tree),
            ],
            0,
        );
        assert_eq!(g.grid.occupied_count(), 4);
        assert!(g.pending.is_none());
        assert!(g.note_visible());
    }

    #[test]
    fn corner_check_waits_for_settle() {
        let mut g = garden();
        let corners = [
            Placement::new(0, 0, GlyphSet::Tree),
            Placement::new(8, 0, GlyphSet::Tree),
            Placement::new(0, 8, GlyphSet::Tree),
            Placement::new(8, 8, GlyphSet::Tree),
        ];
        let run = g.start_pattern(&corners, 100);
        for i in 0..4 {
            g.reveal_step(run, i);
        }
        assert!(!g.note_visible());
        g.settle(run);
        assert!(g.note_visible());
        assert!(g.pending.is_none());
    }

    #[test]
    fn new_pattern_cancels_previous_run() {
        let mut g = garden();
        let first = g.start_pattern(&[Placement::new(1, 1, GlyphSet::Tree)], 100);
        let second = g.start_pattern(&[Placement::new(2, 2, GlyphSet::Tree)], 100);
        assert_ne!(first, second);
        assert!(!g.reveal_step(first, 0));
        assert!(!g.is_occupied(1, 1));
        g.settle(first);
        assert!(g.pending.is_some());
    }
}
