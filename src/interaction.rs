//! Drag-paint controller.
//!
//! A gesture picks its action once, from the first tile it reaches: an
//! occupied tile starts an erase gesture, an empty one a place gesture. The
//! action then holds for every tile the gesture crosses; tiles already in the
//! target state are skipped, so one gesture only ever adds or only removes.

use crate::glyphs::GARDEN;
use crate::model::TilePos;
use crate::random;
use crate::render::Surface;
use crate::state::{DragAction, DragSession, Garden};

impl Garden {
    /// Pointer down / touch start. `None` when nothing tile-like is under the pointer.
    pub fn gesture_start(&mut self, pos: Option<TilePos>) {
        self.drag = DragSession::Dragging(None);
        if let Some(pos) = pos {
            self.touch_tile(pos);
        }
    }

    pub fn gesture_move(&mut self, pos: Option<TilePos>) {
        if !self.drag.is_active() {
            return;
        }
        if let Some(pos) = pos {
            self.touch_tile(pos);
        }
    }

    pub fn gesture_end(&mut self) {
        self.drag = DragSession::Idle;
    }

    fn touch_tile(&mut self, pos: TilePos) {
        if !self.grid.in_bounds(pos) {
            return;
        }
        let action = match self.drag.action() {
            Some(action) => action,
            None => {
                let action = if self.grid.is_occupied(pos) {
                    DragAction::Erase
                } else {
                    DragAction::Place
                };
                self.drag = DragSession::Dragging(Some(action));
                action
            }
        };
        self.apply_drag(pos, action);
        self.refresh_note();
    }

    /// Returns whether the tile changed.
    pub fn apply_drag(&mut self, pos: TilePos, action: DragAction) -> bool {
        let occupied = self.grid.is_occupied(pos);
        match action {
            DragAction::Erase if occupied => {
                self.grid.set_occupied(pos, false);
                self.board.render_empty(pos);
                true
            }
            DragAction::Place if !occupied => {
                let glyph = random::pick(&mut *self.rng.borrow_mut(), GARDEN);
                let Some(glyph) = glyph else {
                    return false;
                };
                self.grid.set_occupied(pos, true);
                self.board.render_emoji(pos, glyph, false);
                true
            }
            _ => false,
        }
    }
}
