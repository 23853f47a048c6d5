//! Playback timing: maps elapsed time to an eased, interpolated fraction.

use web_time::Duration;

use super::easing::EasingFunction;

/// Where a sample falls relative to an animation's active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePhase {
    /// The start offset has not elapsed yet.
    Pending,
    /// Inside one of the iterations.
    Running,
    /// Past the last iteration.
    Finished,
}

/// One sampled point of an animation's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Raw progress within the current iteration (0.0 to 1.0).
    pub raw_t: f32,
    /// `raw_t` after easing. This is what animations interpolate with.
    pub interpolated_t: f32,
    /// Zero-based iteration index, capped at the repeat count.
    pub iteration: u32,
    /// Position relative to the active window.
    pub phase: SamplePhase,
}

/// Duration, delay, repetition, and easing of a single animation.
///
/// Before the start offset the animation holds its first frame, after the
/// last iteration it holds its final frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Length of one iteration.
    pub duration: Duration,
    /// Delay between playback start and the first iteration.
    pub start_offset: Duration,
    /// Extra iterations after the first one.
    pub repeat_count: u32,
    /// Curve applied to the raw progress of every iteration.
    pub easing: EasingFunction,
}

impl Timing {
    /// Single iteration of the given length, no delay, default easing.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            start_offset: Duration::ZERO,
            repeat_count: 0,
            easing: EasingFunction::default(),
        }
    }

    /// Delay the first iteration.
    #[must_use]
    pub fn with_start_offset(mut self, start_offset: Duration) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Play `repeat_count` more iterations after the first.
    #[must_use]
    pub fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Use a different easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Time from playback start until the last iteration completes.
    #[must_use]
    pub fn end(&self) -> Duration {
        let iterations = self.repeat_count.saturating_add(1);
        self.start_offset
            .saturating_add(self.duration.saturating_mul(iterations))
    }

    /// Sample the timeline `elapsed` after playback start.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Sample {
        let Some(active) = elapsed.checked_sub(self.start_offset) else {
            return self.sample_at(0.0, 0, SamplePhase::Pending);
        };

        if self.duration.is_zero() || elapsed >= self.end() {
            return self.sample_at(
                1.0,
                self.repeat_count,
                SamplePhase::Finished,
            );
        }

        let iteration =
            (active.as_nanos() / self.duration.as_nanos()) as u32;
        let within = active.saturating_sub(self.duration * iteration);
        let raw_t =
            (within.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.sample_at(raw_t, iteration, SamplePhase::Running)
    }

    fn sample_at(
        &self,
        raw_t: f32,
        iteration: u32,
        phase: SamplePhase,
    ) -> Sample {
        Sample {
            raw_t,
            interpolated_t: self.easing.evaluate(raw_t),
            iteration,
            phase,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ms: u64) -> Timing {
        Timing::new(Duration::from_millis(ms))
            .with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_progress_within_single_iteration() {
        let timing = linear(100);

        let start = timing.sample(Duration::ZERO);
        assert_eq!(start.phase, SamplePhase::Running);
        assert!(start.interpolated_t.abs() < 1e-6);

        let mid = timing.sample(Duration::from_millis(50));
        assert!((mid.interpolated_t - 0.5).abs() < 1e-4);

        let end = timing.sample(Duration::from_millis(100));
        assert_eq!(end.phase, SamplePhase::Finished);
        assert_eq!(end.interpolated_t, 1.0);

        let past = timing.sample(Duration::from_millis(500));
        assert_eq!(past.phase, SamplePhase::Finished);
        assert_eq!(past.interpolated_t, 1.0);
    }

    #[test]
    fn test_start_offset_holds_first_frame() {
        let timing =
            linear(100).with_start_offset(Duration::from_millis(40));

        let early = timing.sample(Duration::from_millis(20));
        assert_eq!(early.phase, SamplePhase::Pending);
        assert_eq!(early.interpolated_t, 0.0);

        let mid = timing.sample(Duration::from_millis(90));
        assert_eq!(mid.phase, SamplePhase::Running);
        assert!((mid.interpolated_t - 0.5).abs() < 1e-4);

        assert_eq!(timing.end(), Duration::from_millis(140));
    }

    #[test]
    fn test_repeat_count_iterations() {
        let timing = linear(100).with_repeat_count(2);
        assert_eq!(timing.end(), Duration::from_millis(300));

        let second = timing.sample(Duration::from_millis(125));
        assert_eq!(second.iteration, 1);
        assert!((second.raw_t - 0.25).abs() < 1e-4);

        let third = timing.sample(Duration::from_millis(250));
        assert_eq!(third.iteration, 2);
        assert_eq!(third.phase, SamplePhase::Running);

        let done = timing.sample(Duration::from_millis(300));
        assert_eq!(done.iteration, 2);
        assert_eq!(done.phase, SamplePhase::Finished);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let timing = Timing::new(Duration::ZERO);
        let sample = timing.sample(Duration::ZERO);
        assert_eq!(sample.phase, SamplePhase::Finished);
        assert_eq!(sample.interpolated_t, 1.0);
    }

    #[test]
    fn test_easing_applies_to_fraction() {
        let timing = Timing::new(Duration::from_millis(100))
            .with_easing(EasingFunction::Decelerate { factor: 1.0 });
        let mid = timing.sample(Duration::from_millis(50));
        assert!((mid.raw_t - 0.5).abs() < 1e-4);
        assert!((mid.interpolated_t - 0.75).abs() < 1e-3);
    }
}
