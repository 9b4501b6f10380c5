//! Headless interaction logic for a portfolio website.
//!
//! The crate owns the state machines behind the site's moving parts and talks
//! to the browser only through the traits in [`host`]:
//!
//! - [`carousel`] - infinite draggable carousel with auto-scroll and tooltips
//! - [`gallery`] - project feed, card models, scroll reveals, card stacking
//! - [`chrome`] - header, menu, keyboard focus, anchors, konami code, theme
//! - [`grid`] - the decorative warped grid painted behind the hero
//! - [`timing`] - debounce and throttle helpers
//!
//! Ambient pieces: [`settings`] (JSON config + hot reload), [`logging`],
//! [`perf`] (frame timing) and [`error`].

pub mod carousel;
pub mod chrome;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod host;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod timing;

pub use carousel::{AutoScroll, CarouselController, CarouselItem, Track};
pub use error::{ShowreelError, ShowreelResult};
pub use settings::Settings;
