//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: fake host (frame scheduler, track surface, tooltip layer)
//! - integration: multi-component workflows
//! - unit: single-component tests against the public API

mod integration;
mod unit;
