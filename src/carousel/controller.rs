//! Carousel controller - offset bookkeeping and the auto-scroll tick.

use super::state::DragState;
use super::track::{single_copy_width, CarouselItem, Track};
use crate::error::ShowreelResult;
use crate::host::{TooltipId, TooltipLayer, TrackSurface};
use crate::profile_scope;
use crate::settings::CarouselSettings;
use crate::spatial_index::TrackIndex;
use std::collections::HashMap;
use tracing::debug;

/// Infinite carousel state.
///
/// The offset is the track's horizontal translation. It is always `<= 0` and,
/// after every frame tick, strictly greater than `-single_copy_width`.
pub struct CarouselController<S, L> {
    pub(super) surface: S,
    pub(super) tooltips: L,
    pub(super) track: Track<CarouselItem>,
    pub(super) index: TrackIndex,
    pub(super) config: CarouselSettings,
    pub(super) single_copy_width: f32,
    pub(super) current_offset: f32,
    pub(super) drag: DragState,
    pub(super) active_tooltips: HashMap<usize, TooltipId>,
    pub(super) hovered: Option<usize>,
}

impl<S: TrackSurface, L: TooltipLayer> CarouselController<S, L> {
    /// Duplicate `items` onto the surface and measure one copy's width.
    pub fn new(
        items: Vec<CarouselItem>,
        mut surface: S,
        tooltips: L,
        config: CarouselSettings,
    ) -> ShowreelResult<Self> {
        let track = Track::duplicated(items)?;
        surface.render_track(track.items());

        let width = single_copy_width(surface.scroll_width());
        let index = TrackIndex::layout(
            track.items().iter().map(|item| (item.width, item.height)),
            config.item_gap,
        );

        debug!(
            items = track.original_len(),
            single_copy_width = width,
            "Carousel initialized"
        );

        Ok(Self {
            surface,
            tooltips,
            track,
            index,
            config,
            single_copy_width: width,
            current_offset: 0.0,
            drag: DragState::Idle,
            active_tooltips: HashMap::new(),
            hovered: None,
        })
    }

    /// Auto-scroll tick, run once per animation frame.
    ///
    /// A no-op while a drag session owns the offset.
    pub fn on_frame(&mut self) {
        profile_scope!("carousel_frame");

        if self.drag.is_dragging() {
            return;
        }

        self.current_offset -= self.config.speed;
        if self.current_offset.abs() >= self.single_copy_width {
            self.current_offset = 0.0;
        }
        self.surface.set_translate_x(self.current_offset);
    }

    /// Re-measure the track after a viewport resize.
    ///
    /// Keeps the offset within one copy of the new width. Skipped when
    /// `remeasure_on_resize` is off.
    pub fn on_resize(&mut self) {
        if !self.config.remeasure_on_resize {
            return;
        }

        let width = single_copy_width(self.surface.scroll_width());
        if width == self.single_copy_width {
            return;
        }

        debug!(
            old = self.single_copy_width,
            new = width,
            "Carousel width re-measured"
        );
        self.single_copy_width = width;

        let wrapped = if width > 0.0 {
            -((-self.current_offset) % width)
        } else {
            0.0
        };
        if wrapped != self.current_offset {
            // Shift an active session by the same amount so the next move
            // continues from the wrapped position.
            if let Some((_, base)) = self.drag.session() {
                self.drag.rebase(base + (wrapped - self.current_offset));
            }
            self.current_offset = wrapped;
            self.surface.set_translate_x(wrapped);
        }
    }

    /// Replace tuning values (e.g. after a settings reload).
    pub fn apply_settings(&mut self, config: CarouselSettings) {
        if config.item_gap != self.config.item_gap {
            self.index = TrackIndex::layout(
                self.track.items().iter().map(|item| (item.width, item.height)),
                config.item_gap,
            );
        }
        self.config = config;
    }

    pub fn offset(&self) -> f32 {
        self.current_offset
    }

    pub fn single_copy_width(&self) -> f32 {
        self.single_copy_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn track(&self) -> &Track<CarouselItem> {
        &self.track
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tooltips(&self) -> &L {
        &self.tooltips
    }
}
