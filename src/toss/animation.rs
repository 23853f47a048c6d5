//! The rotation driver: angle, visible face and projected transform per frame.

use std::cell::{Cell, RefCell};

use glam::{Mat3, Vec2, Vec3};
use web_time::Duration;

use super::listener::TossListener;
use crate::animation::{Animation, EasingFunction, Timing, Transformation};
use crate::camera::CoinCamera;
use crate::coin::{AxisDirection, Face};

/// Degrees past which the coin shows its back: the edge-on points of a turn.
const BACK_FACING_FROM: u32 = 90;
const BACK_FACING_UNTIL: u32 = 270;

/// Everything a toss needs to know before it starts.
///
/// Owned by the view and copied into each [`TossAnimation`].
#[derive(Debug, Clone, PartialEq)]
pub struct TossParams {
    /// Number of full 360° turns.
    pub circle_count: u32,
    /// Rotation sense around the X axis.
    pub x_axis: AxisDirection,
    /// Rotation sense around the Y axis.
    pub y_axis: AxisDirection,
    /// Rotation sense around the Z axis.
    pub z_axis: AxisDirection,
    /// Face the coin lands on.
    pub result: Face,
    /// Length of the rotation.
    pub duration: Duration,
    /// Delay before the rotation begins.
    pub start_offset: Duration,
    /// Curve applied to rotation progress.
    pub easing: EasingFunction,
}

impl TossParams {
    /// Timing for one playback of the rotation.
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing::new(self.duration)
            .with_start_offset(self.start_offset)
            .with_easing(self.easing)
    }

    /// Per-axis rotation in degrees for an angle within the current turn.
    #[must_use]
    pub fn axis_degrees(&self, degree_in_cycle: u32) -> Vec3 {
        let angle = degree_in_cycle as f32;
        Vec3::new(
            self.x_axis.sign() * angle,
            self.y_axis.sign() * angle,
            self.z_axis.sign() * angle,
        )
    }
}

impl Default for TossParams {
    fn default() -> Self {
        Self {
            circle_count: 12,
            x_axis: AxisDirection::Positive,
            y_axis: AxisDirection::None,
            z_axis: AxisDirection::None,
            result: Face::Front,
            duration: Duration::from_millis(3000),
            start_offset: Duration::ZERO,
            easing: EasingFunction::default(),
        }
    }
}

/// Angle within the current turn, in whole degrees.
///
/// `floor(t · 360 · circle_count) mod 360`. Negative input clamps to zero.
#[must_use]
pub fn degree_in_cycle(interpolated_time: f32, circle_count: u32) -> u32 {
    let total_angle = 360.0 * circle_count as f32;
    ((interpolated_time * total_angle) as u32) % 360
}

/// Face visible at `degree` for a toss landing on `result`.
///
/// Strictly between the two edge-on angles the back of the landing face
/// shows; on the edges themselves the landing face still counts.
#[must_use]
pub fn face_at(degree: u32, result: Face) -> Face {
    if degree > BACK_FACING_FROM && degree < BACK_FACING_UNTIL {
        result.opposite()
    } else {
        result
    }
}

/// Rotates the coin and reports which face is showing.
///
/// One instance plays one toss. The current face starts unset, so the first
/// frame always notifies the listener; after that only flips do.
pub struct TossAnimation {
    params: TossParams,
    timing: Timing,
    camera: CoinCamera,
    size: Cell<(u32, u32)>,
    current_face: Cell<Option<Face>>,
    listener: RefCell<Option<Box<dyn TossListener>>>,
}

impl TossAnimation {
    /// Driver for a toss with the given parameters and the default camera.
    #[must_use]
    pub fn new(params: TossParams) -> Self {
        Self {
            timing: params.timing(),
            params,
            camera: CoinCamera::default(),
            size: Cell::new((0, 0)),
            current_face: Cell::new(None),
            listener: RefCell::new(None),
        }
    }

    /// Project through a different camera.
    #[must_use]
    pub fn with_camera(mut self, camera: CoinCamera) -> Self {
        self.camera = camera;
        self
    }

    /// Repeat the rotation `repeat_count` more times.
    #[must_use]
    pub fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.timing = self.timing.with_repeat_count(repeat_count);
        self
    }

    /// Receive face changes and lifecycle events.
    #[must_use]
    pub fn with_listener(self, listener: Box<dyn TossListener>) -> Self {
        *self.listener.borrow_mut() = Some(listener);
        self
    }

    /// The parameters this toss was built from.
    #[must_use]
    pub fn params(&self) -> &TossParams {
        &self.params
    }

    /// Face shown by the most recent frame, if any frame ran yet.
    #[must_use]
    pub fn current_face(&self) -> Option<Face> {
        self.current_face.get()
    }

    /// Rotation matrix for a frame at `degree` within the turn, anchored at
    /// the view centre.
    #[must_use]
    pub fn frame_matrix(&self, degree: u32) -> Mat3 {
        let (width, height) = self.size.get();
        let center = Vec2::new((width >> 1) as f32, (height >> 1) as f32);
        let rotation = self.camera.rotate(self.params.axis_degrees(degree));
        Mat3::from_translation(center)
            * rotation
            * Mat3::from_translation(-center)
    }

    fn notify(&self, event: impl FnOnce(&mut dyn TossListener, &TossParams)) {
        if let Some(listener) = self.listener.borrow_mut().as_deref_mut() {
            event(listener, &self.params);
        }
    }
}

impl Animation for TossAnimation {
    fn timing(&self) -> &Timing {
        &self.timing
    }

    fn initialize(
        &self,
        width: u32,
        height: u32,
        _parent_width: u32,
        _parent_height: u32,
    ) {
        self.size.set((width, height));
    }

    fn apply_transformation(
        &self,
        interpolated_time: f32,
        transformation: &mut Transformation,
    ) {
        let degree =
            degree_in_cycle(interpolated_time, self.params.circle_count);
        let face = face_at(degree, self.params.result);

        if self.current_face.get() != Some(face) {
            self.current_face.set(Some(face));
            log::trace!("face -> {face} at {degree} deg");
            self.notify(|listener, params| {
                listener.on_face_change(face, params);
            });
        }

        transformation.matrix = self.frame_matrix(degree);
    }

    fn on_start(&self) {
        log::debug!(
            "toss start: {} turns over {:?}, result {}",
            self.params.circle_count,
            self.params.duration,
            self.params.result
        );
        self.notify(|listener, params| listener.on_animation_start(params));
    }

    fn on_repeat(&self) {
        self.notify(|listener, params| listener.on_animation_repeat(params));
    }

    fn on_end(&self) {
        log::debug!("toss end: showing {:?}", self.current_face.get());
        self.notify(|listener, params| listener.on_animation_end(params));
    }

    fn name(&self) -> &'static str {
        "toss"
    }
}

impl std::fmt::Debug for TossAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TossAnimation")
            .field("params", &self.params)
            .field("current_face", &self.current_face.get())
            .field("size", &self.size.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        faces: Vec<Face>,
        starts: usize,
        ends: usize,
    }

    impl TossListener for Recorder {
        fn on_animation_start(&mut self, _toss: &TossParams) {
            self.starts += 1;
        }

        fn on_face_change(&mut self, face: Face, _toss: &TossParams) {
            self.faces.push(face);
        }

        fn on_animation_end(&mut self, _toss: &TossParams) {
            self.ends += 1;
        }
    }

    fn params(circle_count: u32, result: Face) -> TossParams {
        TossParams {
            circle_count,
            result,
            ..TossParams::default()
        }
    }

    #[test]
    fn test_degree_in_cycle_range() {
        for circles in 1..=5 {
            for step in 0..1000 {
                let t = step as f32 / 1000.0;
                let degree = degree_in_cycle(t, circles);
                assert!(degree < 360, "t={t} circles={circles}");
            }
        }
        assert_eq!(degree_in_cycle(0.0, 3), 0);
        assert_eq!(degree_in_cycle(0.25, 1), 90);
        assert_eq!(degree_in_cycle(0.5, 2), 0);
        assert_eq!(degree_in_cycle(1.0, 2), 0);
        assert_eq!(degree_in_cycle(-0.1, 2), 0);
    }

    #[test]
    fn test_face_thresholds_are_exclusive() {
        for result in [Face::Front, Face::Reverse] {
            assert_eq!(face_at(0, result), result);
            assert_eq!(face_at(90, result), result);
            assert_eq!(face_at(91, result), result.opposite());
            assert_eq!(face_at(180, result), result.opposite());
            assert_eq!(face_at(269, result), result.opposite());
            assert_eq!(face_at(270, result), result);
            assert_eq!(face_at(359, result), result);
        }
    }

    #[test]
    fn test_face_follows_degree_for_every_fraction() {
        for result in [Face::Front, Face::Reverse] {
            for circles in [1, 2, 7] {
                for step in 0..2000 {
                    let degree = degree_in_cycle(step as f32 / 2000.0, circles);
                    let edge_on = degree > 90 && degree < 270;
                    let expected =
                        if edge_on { result.opposite() } else { result };
                    assert_eq!(face_at(degree, result), expected);
                }
            }
        }
    }

    #[test]
    fn test_face_changes_only_on_flips() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let toss = TossAnimation::new(params(2, Face::Front))
            .with_listener(Box::new(recorder.clone()));

        let mut frame = Transformation::IDENTITY;
        for step in 0..=720 {
            toss.apply_transformation(step as f32 / 720.0, &mut frame);
        }

        // Two turns: front, back, front, back, front.
        assert_eq!(
            recorder.borrow().faces,
            vec![
                Face::Front,
                Face::Reverse,
                Face::Front,
                Face::Reverse,
                Face::Front
            ]
        );
        assert_eq!(toss.current_face(), Some(Face::Front));
    }

    #[test]
    fn test_reverse_result_starts_and_ends_reverse() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let toss = TossAnimation::new(params(1, Face::Reverse))
            .with_listener(Box::new(recorder.clone()));

        let mut frame = Transformation::IDENTITY;
        for t in [0.0, 0.3, 0.6, 0.9, 1.0] {
            toss.apply_transformation(t, &mut frame);
        }
        let recorded = recorder.borrow();
        let faces = &recorded.faces;
        assert_eq!(faces.first(), Some(&Face::Reverse));
        assert_eq!(faces.last(), Some(&Face::Reverse));
        assert!(faces.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_lifecycle_forwarded() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let toss = TossAnimation::new(params(1, Face::Front))
            .with_listener(Box::new(recorder.clone()));
        toss.on_start();
        toss.on_end();
        assert_eq!(recorder.borrow().starts, 1);
        assert_eq!(recorder.borrow().ends, 1);
    }

    #[test]
    fn test_rotation_anchored_at_center() {
        let toss = TossAnimation::new(TossParams {
            x_axis: AxisDirection::Positive,
            y_axis: AxisDirection::Negative,
            z_axis: AxisDirection::Positive,
            ..TossParams::default()
        });
        toss.initialize(201, 100, 400, 800);

        let center = Vec2::new(100.0, 50.0);
        for degree in [0, 45, 90, 135, 200, 300] {
            let mut frame = Transformation::IDENTITY;
            frame.matrix = toss.frame_matrix(degree);
            let mapped = frame.map_point(center);
            assert!((mapped - center).length() < 1e-3, "degree {degree}");
        }
    }

    #[test]
    fn test_axis_directions_scale_angle() {
        let p = TossParams {
            x_axis: AxisDirection::Negative,
            y_axis: AxisDirection::None,
            z_axis: AxisDirection::Positive,
            ..TossParams::default()
        };
        assert_eq!(p.axis_degrees(30), Vec3::new(-30.0, 0.0, 30.0));
    }
}
