//! Auto-scroll frame loop.
//!
//! Requests a frame, ticks the carousel, and requests the next frame, for as
//! long as the `AutoScroll` handle lives. Dropping the handle (or calling
//! `stop`) cancels the pending request, which also releases the callback's
//! reference to the loop state.

use super::controller::CarouselController;
use crate::host::{FrameHandle, FrameScheduler, TooltipLayer, TrackSurface};
use crate::perf::PerfMonitor;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Controller shared between the frame loop and input handlers.
pub type SharedCarousel<S, L> = Arc<Mutex<CarouselController<S, L>>>;

struct LoopState<S, L, F> {
    carousel: SharedCarousel<S, L>,
    scheduler: Arc<F>,
    running: AtomicBool,
    frames: AtomicU64,
    pending: Mutex<Option<FrameHandle>>,
    perf: Mutex<PerfMonitor>,
}

/// Handle to a running auto-scroll loop.
pub struct AutoScroll<S, L, F>
where
    S: TrackSurface + Send + 'static,
    L: TooltipLayer + Send + 'static,
    F: FrameScheduler + 'static,
{
    state: Arc<LoopState<S, L, F>>,
}

impl<S, L, F> AutoScroll<S, L, F>
where
    S: TrackSurface + Send + 'static,
    L: TooltipLayer + Send + 'static,
    F: FrameScheduler + 'static,
{
    /// Start ticking `carousel` on every frame delivered by `scheduler`.
    pub fn start(carousel: SharedCarousel<S, L>, scheduler: Arc<F>) -> Self {
        let state = Arc::new(LoopState {
            carousel,
            scheduler,
            running: AtomicBool::new(true),
            frames: AtomicU64::new(0),
            pending: Mutex::new(None),
            perf: Mutex::new(PerfMonitor::new()),
        });
        schedule_next(&state);
        debug!("Carousel auto-scroll started");
        Self { state }
    }

    /// Cancel the loop. Idempotent.
    pub fn stop(&self) {
        if !self.state.running.swap(false, Ordering::AcqRel) {
            return;
        }
        let pending = self.state.pending.lock().take();
        if let Some(handle) = pending {
            self.state.scheduler.cancel_frame(handle);
        }
        self.state.perf.lock().log_summary_if_slow();
        debug!(
            frames = self.frames(),
            "Carousel auto-scroll stopped"
        );
    }

    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::Acquire)
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.state.frames.load(Ordering::Relaxed)
    }

    pub fn carousel(&self) -> &SharedCarousel<S, L> {
        &self.state.carousel
    }

    /// Average tick duration in milliseconds.
    pub fn average_tick_ms(&self) -> f64 {
        self.state.perf.lock().average_frame_time()
    }
}

impl<S, L, F> Drop for AutoScroll<S, L, F>
where
    S: TrackSurface + Send + 'static,
    L: TooltipLayer + Send + 'static,
    F: FrameScheduler + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_next<S, L, F>(state: &Arc<LoopState<S, L, F>>)
where
    S: TrackSurface + Send + 'static,
    L: TooltipLayer + Send + 'static,
    F: FrameScheduler + 'static,
{
    let next = Arc::clone(state);
    let handle = state.scheduler.request_frame(Box::new(move |_timestamp| {
        if !next.running.load(Ordering::Acquire) {
            return;
        }
        next.pending.lock().take();

        // Never hold `perf` while waiting on the carousel: input handlers may
        // hold the carousel and query or stop the loop.
        next.perf.lock().begin_frame();
        next.carousel.lock().on_frame();
        next.perf.lock().end_frame();
        next.frames.fetch_add(1, Ordering::Relaxed);

        schedule_next(&next);
    }));

    if state.running.load(Ordering::Acquire) {
        *state.pending.lock() = Some(handle);
    } else {
        state.scheduler.cancel_frame(handle);
    }
}
