//! Header shadow and service numbering.

use crate::constants::{HEADER_SHADOW, HEADER_SHADOW_THRESHOLD};

/// Header appearance for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// At the top of the page
    Flat,
    /// Scrolled; the header casts a shadow
    Raised,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f32) -> Self {
        if scroll_y > HEADER_SHADOW_THRESHOLD {
            Self::Raised
        } else {
            Self::Flat
        }
    }

    /// Value for the header's `box-shadow`.
    pub fn box_shadow(&self) -> &'static str {
        match self {
            Self::Flat => "none",
            Self::Raised => HEADER_SHADOW,
        }
    }
}

/// Number prefix for the service item at `index`: `01`, `02`, ...
///
/// Padded to two digits, so the tenth item is `10`. Naive `"0" + n`
/// prefixing would give `010`.
pub fn service_label(index: usize) -> String {
    format!("{:02}", index + 1)
}
