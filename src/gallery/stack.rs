//! Sticky card stacking.
//!
//! Cards stick below the header at increasing offsets. A stuck card shrinks
//! slightly, shrinks and dims further as the next card approaches, and is
//! pushed out of view once the next card slides over it.

use crate::constants::{
    STACK_BASE_SHRINK, STACK_BASE_TOP, STACK_EXIT_DIM, STACK_EXIT_SHRINK, STACK_PROGRESS_RANGE,
    STACK_PUSH_DIM, STACK_PUSH_RANGE, STACK_PUSH_SHRINK, STACK_STEP,
};
use serde::Serialize;

/// Card position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub top: f32,
    pub height: f32,
}

impl CardRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Computed `transform: scale(..)` and `filter: brightness(..)` for a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardStyle {
    pub scale: f32,
    pub brightness: f32,
}

impl CardStyle {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        brightness: 1.0,
    };

    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    pub fn filter_css(&self) -> String {
        format!("brightness({})", self.brightness)
    }
}

/// Sticky top of the card at `index`.
#[inline]
pub fn sticky_top(index: usize) -> f32 {
    STACK_BASE_TOP + index as f32 * STACK_STEP
}

/// Styles for every card, in order.
pub fn stack_styles(cards: &[CardRect]) -> Vec<CardStyle> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| card_style(index, card, cards.get(index + 1)))
        .collect()
}

fn card_style(index: usize, card: &CardRect, next: Option<&CardRect>) -> CardStyle {
    let Some(next) = next else {
        // The last card is never pushed.
        return CardStyle::IDENTITY;
    };

    let top = sticky_top(index);
    let progress = ((top - card.top) / STACK_PROGRESS_RANGE).clamp(0.0, 1.0);
    let scale = 1.0 - progress * STACK_BASE_SHRINK;

    let next_top = sticky_top(index + 1);
    let mut style = if next.top <= next_top + STACK_PUSH_RANGE {
        let push = ((next_top + STACK_PUSH_RANGE - next.top) / STACK_PUSH_RANGE).clamp(0.0, 1.0);
        let push_scale = 1.0 - push * STACK_PUSH_SHRINK;
        CardStyle {
            scale: scale.min(push_scale),
            brightness: 1.0 - push * STACK_PUSH_DIM,
        }
    } else {
        CardStyle {
            scale,
            brightness: 1.0,
        }
    };

    if card.top <= top && card.height > 0.0 && next.top <= top + card.height {
        let exit = ((top + card.height - next.top) / card.height).clamp(0.0, 1.0);
        style = CardStyle {
            scale: 1.0 - exit * STACK_EXIT_SHRINK,
            brightness: 1.0 - exit * STACK_EXIT_DIM,
        };
    }

    style
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should request a frame now.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Call from the frame callback once the update has run.
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
