//! Project gallery.
//!
//! - `feed` - the static JSON project feed
//! - `card` - card view models and the gallery view
//! - `reveal` - scroll-triggered reveals and lazy images
//! - `stack` - sticky card stacking while scrolling

pub mod card;
pub mod feed;
pub mod reveal;
pub mod stack;

pub use card::{Gallery, ProjectCard};
pub use feed::{Project, ProjectFeed};
pub use reveal::{LazyImages, RevealTracker};
pub use stack::{CardRect, CardStyle, FrameThrottle, stack_styles};
