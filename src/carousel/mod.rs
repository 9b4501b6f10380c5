//! Infinite draggable carousel.
//!
//! The track's items are rendered twice end to end. Auto-scroll moves the
//! track left one step per frame and snaps back to zero once a full copy has
//! scrolled past; because the second copy is identical to the first, the
//! snap is invisible. Dragging overrides auto-scroll and applies the same
//! wraparound at both edges.
//!
//! ## Architecture
//!
//! `CarouselController` owns all mutable state. Drag sessions are an explicit
//! state machine (`DragState`) instead of a loose boolean plus side variables.
//!
//! ```text
//! Idle -> Dragging      (pointer down / touch start)
//! Dragging -> Dragging  (pointer down again: session restarts)
//! Dragging -> Idle      (pointer up / mouse leave / touch end)
//! ```
//!
//! ## Modules
//!
//! - `track` - item duplication and width measurement
//! - `state` - drag session state machine
//! - `controller` - offset bookkeeping and the auto-scroll tick
//! - `drag` - pointer/touch handling and edge correction
//! - `hover` - tooltip side channel and pointer hit testing
//! - `transform` - reading back the rendered CSS transform
//! - `auto_scroll` - the long-lived frame loop driving `on_frame`
//! - `pointer` - pointer event types

mod auto_scroll;
mod controller;
mod drag;
mod hover;
pub mod pointer;
mod state;
mod track;
pub mod transform;

pub use auto_scroll::{AutoScroll, SharedCarousel};
pub use controller::CarouselController;
pub use pointer::{PointerEvent, PointerKind, PointerPhase};
pub use state::DragState;
pub use track::{CarouselItem, Track};
