//! Host environment boundary.
//!
//! Everything the browser provides (frame scheduling, layout measurement,
//! transforms, tooltips, storage) enters the crate through these traits.
//! Browser bindings implement them; tests implement them with recording fakes.

use crate::carousel::CarouselItem;
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// Frame Scheduling
// ============================================================================

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64) + Send + 'static>;

/// Opaque handle for a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Per-frame scheduling primitive (`requestAnimationFrame` in a browser).
pub trait FrameScheduler: Send + Sync {
    /// Run `callback` once before the next repaint.
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

// ============================================================================
// Track Surface
// ============================================================================

/// Cursor shown over the carousel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Grab,
    Grabbing,
}

/// The rendered carousel: a container with a horizontally translated track.
pub trait TrackSurface {
    /// Render the full (already duplicated) item list into the track.
    fn render_track(&mut self, items: &[CarouselItem]);

    /// Total rendered width of the track content (both copies).
    fn scroll_width(&self) -> f32;

    /// Left offset of the container in the viewport.
    fn container_left(&self) -> f32;

    /// Apply `translateX(px)` to the track.
    fn set_translate_x(&mut self, px: f32);

    /// Computed CSS transform of the track, e.g. `matrix(1, 0, 0, 1, -120, 0)`.
    /// `None` when nothing is rendered yet.
    fn rendered_transform(&self) -> Option<String>;

    /// Update the container cursor.
    fn set_cursor(&mut self, _cursor: CursorStyle) {}
}

// ============================================================================
// Tooltips
// ============================================================================

/// Identifier of a tooltip element created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipId(pub Uuid);

impl TooltipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TooltipId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a tooltip sits relative to its item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Vertical offset from the item's top edge (negative is above)
    pub offset_y: f32,
    /// Horizontally centred over the item
    pub centered: bool,
}

/// Host layer that creates and removes tooltip elements.
pub trait TooltipLayer {
    fn show_tooltip(&mut self, id: TooltipId, item: usize, label: &str, placement: TooltipPlacement);
    fn remove_tooltip(&mut self, id: TooltipId);
}

// ============================================================================
// Key-Value Storage
// ============================================================================

/// Local or session storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store, used for hosts without persistent storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
