//! Button glue: one call per user tap.

use rand::Rng;

use crate::animation::{shared, EasingFunction, Timing, TranslateAnimation};
use crate::coin::Face;
use crate::options::FlightOptions;
use crate::toss::CoinView;

/// Starts a toss with a random outcome and an up-and-down flight.
#[derive(Debug, Clone, Default)]
pub struct TossController {
    flight: FlightOptions,
}

impl TossController {
    /// Controller using the given flight path.
    #[must_use]
    pub fn new(flight: FlightOptions) -> Self {
        Self { flight }
    }

    /// The flight path.
    #[must_use]
    pub fn flight(&self) -> &FlightOptions {
        &self.flight
    }

    /// Handle a tap: replace the view's secondary animations with a fresh
    /// rise and fall, draw the outcome from `rng`, and start the toss.
    ///
    /// Returns the outcome the coin will land on.
    pub fn toss<D, R>(&self, view: &mut CoinView<D>, rng: &mut R) -> Face
    where
        D: Clone + 'static,
        R: Rng + ?Sized,
    {
        view.clear_secondary_animations();

        let rise_duration = self.flight.rise_duration();
        let rise = TranslateAnimation::vertical(
            -self.flight.rise_distance,
            Timing::new(rise_duration).with_easing(EasingFunction::Linear),
        );
        let fall = TranslateAnimation::vertical(
            self.flight.rise_distance,
            Timing::new(self.flight.fall_duration())
                .with_start_offset(rise_duration)
                .with_easing(EasingFunction::Linear),
        );

        let outcome = Face::random(rng);
        view.set_easing(EasingFunction::Linear);
        view.set_outcome(outcome);
        view.add_secondary_animation(shared(rise));
        view.add_secondary_animation(shared(fall));
        view.start_toss();

        log::debug!("toss requested, outcome {outcome}");
        outcome
    }
}
