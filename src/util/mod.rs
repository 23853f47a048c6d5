//! Shared utilities.

/// Fixed-rate frame clock.
pub mod frame_timing;
