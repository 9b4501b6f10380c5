//! Pointer and touch events delivered to the carousel container.

/// Input device that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Start,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    End,
    /// mouseleave / touchcancel
    Leave,
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub client_x: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, phase: PointerPhase, client_x: f32) -> Self {
        Self {
            kind,
            phase,
            client_x,
        }
    }

    pub fn mouse_down(client_x: f32) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Start, client_x)
    }

    pub fn mouse_move(client_x: f32) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Move, client_x)
    }

    pub fn mouse_up(client_x: f32) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::End, client_x)
    }

    pub fn mouse_leave(client_x: f32) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Leave, client_x)
    }

    pub fn touch_start(client_x: f32) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Start, client_x)
    }

    pub fn touch_move(client_x: f32) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Move, client_x)
    }

    pub fn touch_end(client_x: f32) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::End, client_x)
    }
}
