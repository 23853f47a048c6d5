use web_time::{Duration, Instant};

/// Fixed-rate frame clock for hosts without a vsync callback.
///
/// Hands out one frame instant per call, either paced against the wall clock
/// ([`wait_next`](Self::wait_next)) or simulated ([`advance`](Self::advance))
/// for headless playback and tests.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Frame duration based on target FPS
    frame_duration: Duration,
    /// Timestamp of the last frame handed out
    last_frame: Instant,
    /// Frames handed out so far
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Frame clock whose first frame is `origin`.
    #[must_use]
    pub fn starting_at(target_fps: u32, origin: Instant) -> Self {
        let frame_duration = if target_fps > 0 {
            Duration::from_nanos(1_000_000_000 / u64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            frame_duration,
            last_frame: origin,
            frame_count: 0,
        }
    }

    /// Target frame rate (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time between two frames.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Frames handed out so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Next simulated frame instant, without sleeping.
    ///
    /// The first call returns the origin itself.
    pub fn advance(&mut self) -> Instant {
        if self.frame_count > 0 {
            self.last_frame += self.frame_duration;
        }
        self.frame_count += 1;
        self.last_frame
    }

    /// Sleep until the next frame is due and return the current instant.
    pub fn wait_next(&mut self) -> Instant {
        if self.frame_count > 0 {
            let due = self.last_frame + self.frame_duration;
            let now = Instant::now();
            if due > now {
                std::thread::sleep(due - now);
            }
        }
        self.frame_count += 1;
        self.last_frame = Instant::now();
        self.last_frame
    }
}
