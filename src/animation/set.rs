//! Plays a group of animations that share one start time.

use web_time::{Duration, Instant};

use super::timing::SamplePhase;
use super::traits::SharedAnimation;
use super::transformation::Transformation;

/// Playback bookkeeping for one member of a set.
struct Track {
    animation: SharedAnimation,
    started: bool,
    finished: bool,
    iteration: u32,
}

/// A group of animations started together, none waiting on another.
///
/// The start time is taken from the first [`tick`](Self::tick), so building
/// a set and handing it to the view does not race with the frame clock.
/// Every tick samples each member, fires its lifecycle hooks, and composes
/// the member transforms in insertion order.
#[derive(Default)]
pub struct AnimationSet {
    tracks: Vec<Track>,
    start_time: Option<Instant>,
}

impl AnimationSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member.
    pub fn add(&mut self, animation: SharedAnimation) {
        self.tracks.push(Track {
            animation,
            started: false,
            finished: false,
            iteration: 0,
        });
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Pass view and parent sizes to every member.
    pub fn initialize(
        &self,
        width: u32,
        height: u32,
        parent_width: u32,
        parent_height: u32,
    ) {
        for track in &self.tracks {
            track
                .animation
                .initialize(width, height, parent_width, parent_height);
        }
    }

    /// Time from the first tick until the last member finishes.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.tracks
            .iter()
            .map(|track| track.animation.timing().end())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Whether the first tick has happened.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether every member has played its final frame.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.has_started() && self.tracks.iter().all(|track| track.finished)
    }

    /// Advance to `now` and return the combined transform of this frame.
    ///
    /// Returns `None` once the set has finished.
    pub fn tick(&mut self, now: Instant) -> Option<Transformation> {
        if self.is_finished() {
            return None;
        }
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);

        let mut combined = Transformation::IDENTITY;
        let mut frame = Transformation::IDENTITY;
        for track in &mut self.tracks {
            let animation = &track.animation;
            let sample = animation.timing().sample(elapsed);

            // Waiting members hold their first frame, so they start too.
            if !track.started {
                track.started = true;
                animation.on_start();
            }
            while track.iteration < sample.iteration {
                track.iteration += 1;
                animation.on_repeat();
            }

            frame.clear();
            animation.apply_transformation(sample.interpolated_t, &mut frame);
            combined.compose(&frame);

            if sample.phase == SamplePhase::Finished && !track.finished {
                track.finished = true;
                log::trace!("animation '{}' finished", animation.name());
                animation.on_end();
            }
        }
        Some(combined)
    }

    /// Stop playback. Members that started but did not finish get their
    /// end hook.
    pub fn cancel(&mut self) {
        for track in &mut self.tracks {
            if track.started && !track.finished {
                track.finished = true;
                track.animation.on_end();
            }
        }
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
        for track in &mut self.tracks {
            track.finished = true;
        }
    }
}

impl std::fmt::Debug for AnimationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSet")
            .field("members", &self.tracks.len())
            .field("started", &self.has_started())
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::animation::easing::EasingFunction;
    use crate::animation::timing::Timing;
    use crate::animation::traits::{shared, Animation};
    use crate::animation::translate::TranslateAnimation;

    /// Records lifecycle hooks into a shared log.
    struct Probe {
        timing: Timing,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Animation for Probe {
        fn timing(&self) -> &Timing {
            &self.timing
        }

        fn apply_transformation(&self, _t: f32, _out: &mut Transformation) {
            self.log.borrow_mut().push("frame");
        }

        fn on_start(&self) {
            self.log.borrow_mut().push("start");
        }

        fn on_repeat(&self) {
            self.log.borrow_mut().push("repeat");
        }

        fn on_end(&self) {
            self.log.borrow_mut().push("end");
        }
    }

    fn linear(ms: u64) -> Timing {
        Timing::new(Duration::from_millis(ms))
            .with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_rise_then_fall_returns_to_rest() {
        let mut set = AnimationSet::new();
        set.add(shared(TranslateAnimation::vertical(-700.0, linear(2000))));
        set.add(shared(TranslateAnimation::vertical(
            700.0,
            linear(1000).with_start_offset(Duration::from_millis(2000)),
        )));
        assert_eq!(set.duration(), Duration::from_millis(3000));

        let t0 = Instant::now();
        let at = |ms: u64| t0 + Duration::from_millis(ms);

        let first = set.tick(t0).unwrap();
        assert!(first.map_point(Vec2::ZERO).length() < 1e-3);

        let peak = set.tick(at(2000)).unwrap();
        assert!((peak.map_point(Vec2::ZERO).y + 700.0).abs() < 1e-2);

        let halfway_down = set.tick(at(2500)).unwrap();
        assert!((halfway_down.map_point(Vec2::ZERO).y + 350.0).abs() < 1e-2);
        assert!(!set.is_finished());

        let landed = set.tick(at(3000)).unwrap();
        assert!(landed.map_point(Vec2::ZERO).length() < 1e-2);
        assert!(set.is_finished());
        assert!(set.tick(at(3100)).is_none());
    }

    #[test]
    fn test_lifecycle_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = AnimationSet::new();
        set.add(shared(Probe {
            timing: linear(100).with_repeat_count(1),
            log: Rc::clone(&log),
        }));

        let t0 = Instant::now();
        for ms in [0, 50, 150, 200] {
            let _frame = set.tick(t0 + Duration::from_millis(ms));
        }
        assert_eq!(
            *log.borrow(),
            vec!["start", "frame", "frame", "repeat", "frame", "frame", "end"]
        );
    }

    #[test]
    fn test_delayed_member_starts_before_its_first_frame() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = AnimationSet::new();
        set.add(shared(Probe {
            timing: linear(100).with_start_offset(Duration::from_millis(50)),
            log: Rc::clone(&log),
        }));

        let t0 = Instant::now();
        let _frame = set.tick(t0);
        assert_eq!(*log.borrow(), vec!["start", "frame"]);
        let _frame = set.tick(t0 + Duration::from_millis(60));
        assert_eq!(*log.borrow(), vec!["start", "frame", "frame"]);
        let _frame = set.tick(t0 + Duration::from_millis(150));
        assert_eq!(
            *log.borrow(),
            vec!["start", "frame", "frame", "frame", "end"]
        );
    }

    #[test]
    fn test_cancel_ends_started_members_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = AnimationSet::new();
        set.add(shared(Probe {
            timing: linear(100),
            log: Rc::clone(&log),
        }));

        let _frame = set.tick(Instant::now());
        set.cancel();
        set.cancel();
        assert!(set.is_finished());
        assert_eq!(*log.borrow(), vec!["start", "frame", "end"]);
    }

    #[test]
    fn test_cancel_before_start_is_silent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = AnimationSet::new();
        set.add(shared(Probe {
            timing: linear(100),
            log: Rc::clone(&log),
        }));
        set.cancel();
        assert!(set.is_finished());
        assert!(log.borrow().is_empty());
    }
}
