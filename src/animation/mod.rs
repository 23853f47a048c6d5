//! Host-agnostic animation playback.
//!
//! Animations describe a transform as a function of eased progress; an
//! [`AnimationSet`] plays several of them against host-supplied frame
//! instants and dispatches their lifecycle hooks.

pub mod easing;
mod set;
mod timing;
mod traits;
mod transformation;
mod translate;

pub use easing::EasingFunction;
pub use set::AnimationSet;
pub use timing::{Sample, SamplePhase, Timing};
pub use traits::{shared, Animation, SharedAnimation};
pub use transformation::Transformation;
pub use translate::TranslateAnimation;
