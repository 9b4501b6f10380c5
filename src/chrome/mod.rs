//! Site chrome - the small interactions around the page content.
//!
//! - `header` - header shadow and service numbering
//! - `navigation` - dropdown menu, anchor scrolling, keyboard focus mode
//! - `konami` - konami-code easter egg
//! - `theme` - stored theme preference

pub mod header;
pub mod konami;
pub mod navigation;
pub mod theme;

pub use header::{HeaderStyle, service_label};
pub use konami::{EasterEgg, KonamiDetector};
pub use navigation::{AnchorAction, BodyScroll, FocusMode, MenuState};
pub use theme::Theme;
