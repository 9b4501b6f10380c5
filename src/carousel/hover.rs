//! Tooltip side channel and pointer hit testing.

use super::controller::CarouselController;
use crate::constants::TOOLTIP_OFFSET_Y;
use crate::host::{TooltipId, TooltipLayer, TooltipPlacement, TrackSurface};
use tracing::trace;

impl<S: TrackSurface, L: TooltipLayer> CarouselController<S, L> {
    /// Show the item's tooltip, unless a drag is in progress.
    pub fn on_hover_enter(&mut self, item: usize) {
        if self.drag.is_dragging() {
            trace!(item, "Tooltip suppressed while dragging");
            return;
        }
        if self.active_tooltips.contains_key(&item) {
            return;
        }
        let Some(entry) = self.track.get(item) else {
            return;
        };

        let id = TooltipId::new();
        let placement = TooltipPlacement {
            offset_y: TOOLTIP_OFFSET_Y,
            centered: true,
        };
        self.tooltips.show_tooltip(id, item, &entry.name, placement);
        self.active_tooltips.insert(item, id);
    }

    /// Remove the item's tooltip if it has one.
    pub fn on_hover_leave(&mut self, item: usize) {
        if let Some(id) = self.active_tooltips.remove(&item) {
            self.tooltips.remove_tooltip(id);
        }
    }

    /// Resolve a pointer position to a track item and fire enter/leave.
    ///
    /// `client_x` is in viewport coordinates; `y` is relative to the track's
    /// top edge. Returns the hovered item.
    pub fn hover_at(&mut self, client_x: f32, y: f32) -> Option<usize> {
        let hit = self.item_at(client_x, y);
        if hit != self.hovered {
            if let Some(previous) = self.hovered {
                self.on_hover_leave(previous);
            }
            if let Some(current) = hit {
                self.on_hover_enter(current);
            }
            self.hovered = hit;
        }
        hit
    }

    /// Item under a viewport position, accounting for the current offset.
    pub fn item_at(&self, client_x: f32, y: f32) -> Option<usize> {
        let track_x = client_x - self.surface.container_left() - self.current_offset;
        self.index.query_point(track_x, y)
    }

    /// Item indices visible through a container of the given width.
    pub fn visible_items(&self, container_width: f32) -> Vec<usize> {
        let start = -self.current_offset;
        self.index.query_span(start, start + container_width)
    }

    pub fn has_tooltip(&self, item: usize) -> bool {
        self.active_tooltips.contains_key(&item)
    }

    pub fn tooltip_count(&self) -> usize {
        self.active_tooltips.len()
    }
}
