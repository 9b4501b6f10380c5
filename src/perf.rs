//! Frame timing and profiling instrumentation.
//!
//! `PerfMonitor` keeps a rolling window of frame times for the auto-scroll
//! loop and warns about frames that blow the 60 FPS budget. `ScopedTimer`
//! and `profile_scope!` time individual handlers.
//!
//! Enable detailed output with the `profiling` feature:
//! ```toml
//! [dependencies]
//! showreel = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn on_drag_move(&mut self, client_x: f32) {
//!     profile_scope!("carousel_drag_move");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::{trace, warn};

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of frames kept for rolling averages
const SAMPLE_COUNT: usize = 60;

/// A frame slower than target × this factor is reported
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time the enclosing scope. Compiles to nothing without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use crate::profile_scope;

// ============================================================================
// Frame Monitor
// ============================================================================

/// Rolling frame-time monitor for the auto-scroll loop.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    frame_times: VecDeque<f64>,
    frame_start: Option<Instant>,
    slow_frame_count: u64,
    total_frames: u64,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame. Returns the frame time in milliseconds,
    /// or `None` if no frame was started.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.record_frame(ms);
        Some(ms)
    }

    /// Record a frame time measured elsewhere.
    pub fn record_frame(&mut self, ms: f64) {
        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }
    }

    /// Average over the retained window.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frame_count as f64 / self.total_frames as f64) * 100.0
    }

    /// Log a summary if the average frame ran over budget.
    pub fn log_summary_if_slow(&self) {
        let avg = self.average_frame_time();
        if avg <= TARGET_FRAME_MS {
            return;
        }
        warn!(
            avg_frame_ms = format!("{:.2}", avg),
            max_frame_ms = format!("{:.2}", self.max_frame_time()),
            slow_percentage = format!("{:.1}%", self.slow_frame_percentage()),
            "Performance below target"
        );
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Traces the scope's duration on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer used by `profile_scope!` (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
