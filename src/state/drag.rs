// Drag gesture state, replaces the module-level drag flags.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAction {
    Place,
    Erase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    /// `None` until the gesture reaches its first tile.
    Dragging(Option<DragAction>),
}

impl DragSession {
    pub fn is_active(self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    pub fn action(self) -> Option<DragAction> {
        match self {
            DragSession::Dragging(action) => action,
            DragSession::Idle => None,
        }
    }
}
