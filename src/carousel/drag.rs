//! Drag operations - pointer/touch input that overrides auto-scroll.
//!
//! Move events arrive at pointer rate, so the move path does no allocation
//! and touches only the offset and the session base.

use super::controller::CarouselController;
use super::pointer::{PointerEvent, PointerKind, PointerPhase};
use super::transform::parse_translate_x;
use crate::host::{CursorStyle, TooltipLayer, TrackSurface};
use crate::profile_scope;
use tracing::{debug, warn};

impl<S: TrackSurface, L: TooltipLayer> CarouselController<S, L> {
    /// Route a pointer event to the matching drag handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Start => self.on_drag_start(event.kind, event.client_x),
            PointerPhase::Move => self.on_drag_move(event.client_x),
            PointerPhase::End | PointerPhase::Leave => self.on_drag_end(event.kind),
        }
    }

    /// Begin a drag session.
    ///
    /// The offset is re-read from the rendered transform rather than trusted
    /// from internal bookkeeping, so anything that moved the track behind the
    /// controller's back is picked up here.
    pub fn on_drag_start(&mut self, pointer: PointerKind, client_x: f32) {
        profile_scope!("carousel_drag_start");

        if self.drag.is_dragging() {
            debug!("Drag started while a session was active, restarting");
        }

        let start_x = client_x - self.surface.container_left();
        let offset = self.rendered_offset();
        self.current_offset = offset;
        self.drag.start(pointer, start_x, offset);

        if pointer == PointerKind::Mouse {
            self.surface.set_cursor(CursorStyle::Grabbing);
        }
        debug!(start_x, offset, ?pointer, "Carousel drag started");
    }

    /// Follow the pointer, wrapping at either edge of the first copy.
    pub fn on_drag_move(&mut self, client_x: f32) {
        profile_scope!("carousel_drag_move");

        let Some((start_x, base)) = self.drag.session() else {
            return;
        };

        let x = client_x - self.surface.container_left();
        let walk = (x - start_x) * self.config.drag_multiplier;
        let mut offset = base + walk;

        // Rebase after snapping so the next move continues from the snapped
        // position instead of jumping back.
        if offset > 0.0 {
            offset = -self.single_copy_width;
            self.drag.rebase(offset - walk);
        } else if offset.abs() > self.single_copy_width {
            offset = 0.0;
            self.drag.rebase(offset - walk);
        }

        self.current_offset = offset;
        self.surface.set_translate_x(offset);
    }

    /// End the drag session. Auto-scroll resumes from the current offset.
    pub fn on_drag_end(&mut self, pointer: PointerKind) {
        if pointer == PointerKind::Mouse {
            self.surface.set_cursor(CursorStyle::Grab);
        }
        if self.drag.is_dragging() {
            debug!(offset = self.current_offset, "Carousel drag ended");
        }
        self.drag.reset();
    }

    /// Offset currently shown on screen; unreadable transforms count as 0.
    fn rendered_offset(&self) -> f32 {
        match self.surface.rendered_transform() {
            Some(css) => parse_translate_x(&css).unwrap_or_else(|| {
                warn!(transform = %css, "Unreadable track transform, resyncing to 0");
                0.0
            }),
            None => 0.0,
        }
    }
}
