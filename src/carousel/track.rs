//! Track duplication.

use crate::error::{ShowreelError, ShowreelResult};
use serde::{Deserialize, Serialize};

/// One carousel entry (a tool icon in the site's "tools" strip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Label shown in the hover tooltip
    pub name: String,
    /// Rendered width in pixels
    pub width: f32,
    /// Rendered height in pixels
    pub height: f32,
}

impl CarouselItem {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Ordered items followed by an identical second copy.
///
/// Item `i` and item `i + original_len` always hold the same content; the
/// track is never resized after construction.
#[derive(Debug, Clone)]
pub struct Track<T> {
    items: Vec<T>,
    original_len: usize,
}

impl<T: Clone> Track<T> {
    /// Append a deep copy of every item to the end of `items`.
    pub fn duplicated(items: Vec<T>) -> ShowreelResult<Self> {
        if items.is_empty() {
            return Err(ShowreelError::EmptyTrack);
        }

        let original_len = items.len();
        let mut all = Vec::with_capacity(original_len * 2);
        all.extend_from_slice(&items);
        all.extend(items);

        Ok(Self {
            items: all,
            original_len,
        })
    }
}

impl<T> Track<T> {
    /// Total number of items, clones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items before duplication.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Whether `index` falls in the appended copy.
    pub fn is_clone(&self, index: usize) -> bool {
        index >= self.original_len && index < self.items.len()
    }

    /// Index of the original item rendered at `index`.
    pub fn original_index(&self, index: usize) -> usize {
        index % self.original_len
    }
}

/// Width of one pass through the items, given the measured width of both copies.
#[inline]
pub fn single_copy_width(scroll_width: f32) -> f32 {
    (scroll_width / 2.0).max(0.0)
}
