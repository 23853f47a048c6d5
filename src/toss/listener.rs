//! Toss event callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use super::animation::TossParams;
use crate::coin::Face;

/// Receives the events of a toss animation.
///
/// All hooks default to no-ops so listeners only implement what they need.
pub trait TossListener {
    /// The rotation entered its active window.
    fn on_animation_start(&mut self, _toss: &TossParams) {}

    /// The visible face changed. Fired on the first frame and then only when
    /// the face actually flips.
    fn on_face_change(&mut self, _face: Face, _toss: &TossParams) {}

    /// The rotation began another iteration.
    fn on_animation_repeat(&mut self, _toss: &TossParams) {}

    /// The rotation played its last frame (or was cancelled after starting).
    fn on_animation_end(&mut self, _toss: &TossParams) {}
}

/// Listener shared between the caller and every toss it observes.
pub type SharedListener = Rc<RefCell<dyn TossListener>>;

impl<L: TossListener + ?Sized> TossListener for Rc<RefCell<L>> {
    fn on_animation_start(&mut self, toss: &TossParams) {
        self.borrow_mut().on_animation_start(toss);
    }

    fn on_face_change(&mut self, face: Face, toss: &TossParams) {
        self.borrow_mut().on_face_change(face, toss);
    }

    fn on_animation_repeat(&mut self, toss: &TossParams) {
        self.borrow_mut().on_animation_repeat(toss);
    }

    fn on_animation_end(&mut self, toss: &TossParams) {
        self.borrow_mut().on_animation_end(toss);
    }
}

/// Logs every event through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

impl TossListener for LogListener {
    fn on_animation_start(&mut self, toss: &TossParams) {
        log::info!(
            "toss started: {} turns, landing on {}",
            toss.circle_count,
            toss.result
        );
    }

    fn on_face_change(&mut self, face: Face, _toss: &TossParams) {
        log::info!("showing {face}");
    }

    fn on_animation_repeat(&mut self, _toss: &TossParams) {
        log::info!("toss repeating");
    }

    fn on_animation_end(&mut self, toss: &TossParams) {
        log::info!("toss ended on {}", toss.result);
    }
}
