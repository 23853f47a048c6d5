//! Core trait for animations played by an
//! [`AnimationSet`](super::AnimationSet).

use std::rc::Rc;

use super::timing::Timing;
use super::transformation::Transformation;

/// Something that contributes a transform to a view on every frame.
///
/// Playback state (started, finished, current iteration) is tracked by the
/// set that plays the animation. Implementations that need per-frame state
/// of their own keep it behind `Cell`/`RefCell`, since everything here runs
/// on the UI thread.
pub trait Animation {
    /// Duration, delay, repetition, and easing.
    fn timing(&self) -> &Timing;

    /// Size of the animated view and of its parent, in pixels.
    ///
    /// Called once before the first frame.
    fn initialize(
        &self,
        _width: u32,
        _height: u32,
        _parent_width: u32,
        _parent_height: u32,
    ) {
    }

    /// Write this frame's transform for the eased fraction
    /// `interpolated_time` (0.0 to 1.0).
    fn apply_transformation(
        &self,
        interpolated_time: f32,
        transformation: &mut Transformation,
    );

    /// First frame inside the active window is about to be applied.
    fn on_start(&self) {}

    /// A new iteration began.
    fn on_repeat(&self) {}

    /// The final frame was applied, or playback was cancelled after start.
    fn on_end(&self) {}

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared animation references.
pub type SharedAnimation = Rc<dyn Animation>;

/// Create a shared animation from any [`Animation`] implementation.
pub fn shared<A: Animation + 'static>(animation: A) -> SharedAnimation {
    Rc::new(animation)
}
