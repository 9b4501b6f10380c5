//! Scroll-triggered reveals and lazy image loading.
//!
//! Both follow intersection-observer semantics over vertical extents: an
//! element's visible ratio is the share of its height inside the root box.

use crate::settings::RevealSettings;
use std::collections::HashSet;

/// Share of `[top, top + height)` inside `[root_top, root_bottom)`.
///
/// Zero-height elements count as fully visible when their top is inside.
pub fn visible_ratio(top: f32, height: f32, root_top: f32, root_bottom: f32) -> f32 {
    if height <= 0.0 {
        return if top >= root_top && top < root_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(root_bottom) - top.max(root_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// Inline style applied to a revealed element.
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";

/// Tracks which elements have been revealed. Reveals are permanent.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    bottom_margin: f32,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new(settings: &RevealSettings) -> Self {
        Self {
            threshold: settings.threshold,
            bottom_margin: settings.bottom_margin,
            revealed: HashSet::new(),
        }
    }

    /// Check element positions (viewport coordinates) after a scroll.
    /// Returns the elements revealed by this update, in input order.
    pub fn update<I>(&mut self, elements: I, viewport_height: f32) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f32, f32)>,
    {
        let root_bottom = viewport_height - self.bottom_margin;
        let mut newly = Vec::new();

        for (id, top, height) in elements {
            if self.revealed.contains(&id) {
                continue;
            }
            let ratio = visible_ratio(top, height, 0.0, root_bottom);
            if ratio > 0.0 && ratio >= self.threshold {
                self.revealed.insert(id);
                newly.push(id);
            }
        }

        if !newly.is_empty() {
            tracing::trace!(count = newly.len(), "Elements revealed");
        }
        newly
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(&RevealSettings::default())
    }
}

/// An `<img data-src>` waiting to be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyImage {
    pub src: String,
    pub data_src: Option<String>,
    pub loaded: bool,
}

impl LazyImage {
    pub fn new(src: impl Into<String>, data_src: Option<String>) -> Self {
        Self {
            src: src.into(),
            data_src,
            loaded: false,
        }
    }
}

/// Swaps `data-src` into `src` the first time an image intersects the viewport,
/// then stops observing it.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    pub fn new(images: Vec<LazyImage>) -> Self {
        Self { images }
    }

    /// Load every pending image that intersects the viewport.
    /// Returns the indices loaded by this update.
    pub fn update<I>(&mut self, rects: I, viewport_height: f32) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f32, f32)>,
    {
        let mut loaded = Vec::new();
        for (index, top, height) in rects {
            let Some(image) = self.images.get_mut(index) else {
                continue;
            };
            if image.loaded || visible_ratio(top, height, 0.0, viewport_height) <= 0.0 {
                continue;
            }
            if let Some(data_src) = image.data_src.take() {
                image.src = data_src;
            }
            image.loaded = true;
            loaded.push(index);
        }
        loaded
    }

    pub fn get(&self, index: usize) -> Option<&LazyImage> {
        self.images.get(index)
    }

    /// Images still being observed.
    pub fn pending(&self) -> usize {
        self.images.iter().filter(|image| !image.loaded).count()
    }
}
