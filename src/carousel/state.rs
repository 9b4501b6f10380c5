//! Drag session state machine.
//!
//! The session data lives inside the `Dragging` variant, so a start position
//! without an active session cannot exist.

use super::pointer::PointerKind;

/// Drag interaction state of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Auto-scroll owns the offset
    #[default]
    Idle,

    /// Pointer input owns the offset
    Dragging {
        /// Device that started the session
        pointer: PointerKind,
        /// Pointer x relative to the container at session start
        start_x: f32,
        /// Offset the current walk is applied to
        offset_at_start: f32,
    },
}

impl DragState {
    /// Returns true while a drag session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Begin a session, replacing any session already in progress
    pub fn start(&mut self, pointer: PointerKind, start_x: f32, offset_at_start: f32) {
        *self = Self::Dragging {
            pointer,
            start_x,
            offset_at_start,
        };
    }

    /// End the session
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// `(start_x, offset_at_start)` of the active session
    pub fn session(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging {
                start_x,
                offset_at_start,
                ..
            } => Some((*start_x, *offset_at_start)),
            Self::Idle => None,
        }
    }

    /// Device driving the active session
    pub fn pointer(&self) -> Option<PointerKind> {
        match self {
            Self::Dragging { pointer, .. } => Some(*pointer),
            Self::Idle => None,
        }
    }

    /// Move the session base after an edge correction
    pub fn rebase(&mut self, offset: f32) {
        if let Self::Dragging { offset_at_start, .. } = self {
            *offset_at_start = offset;
        }
    }
}
