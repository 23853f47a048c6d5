//! The coin toss: rotation driver, listener plumbing, and the coin view.
//!
//! [`TossAnimation`] turns interpolated time into a rotation angle, a visible
//! face, and a projected matrix. [`CoinView`] owns the face images and the
//! parameters, wraps the caller's [`TossListener`] so that face changes swap
//! the displayed image, and plays the rotation together with any secondary
//! animations.

mod animation;
mod listener;
mod view;

pub use animation::{degree_in_cycle, face_at, TossAnimation, TossParams};
pub use listener::{LogListener, SharedListener, TossListener};
pub use view::CoinView;
