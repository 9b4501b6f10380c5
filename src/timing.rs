//! Debounce and throttle for event handlers.
//!
//! Both are driven by explicit `Instant`s instead of timers so the host can
//! feed its own clock (the frame timestamp, `performance.now()`, ...).

use std::time::{Duration, Instant};

/// Runs a call only after `wait` has passed without another call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Register a call, pushing the deadline back.
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Lets at most one call through per `limit`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    blocked_until: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            blocked_until: None,
        }
    }

    /// Returns true if the call should run now.
    pub fn try_call(&mut self, now: Instant) -> bool {
        if let Some(until) = self.blocked_until {
            if now < until {
                return false;
            }
        }
        self.blocked_until = Some(now + self.limit);
        true
    }
}
