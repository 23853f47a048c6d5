//! Coin view: owns the faces, the parameters, and the active toss.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use super::animation::{TossAnimation, TossParams};
use super::listener::{SharedListener, TossListener};
use crate::animation::{
    shared, AnimationSet, EasingFunction, SharedAnimation, Transformation,
};
use crate::camera::CoinCamera;
use crate::coin::{AxisDirection, Face};
use crate::error::TossError;
use crate::options::TossOptions;

/// Displayed image plus the two face images.
struct CoinImages<D> {
    current: Option<D>,
    front: Option<D>,
    reverse: Option<D>,
}

impl<D: Clone> CoinImages<D> {
    /// Faces without an explicit image show whatever the view shows.
    fn fill_unset_faces(&mut self) {
        if self.front.is_none() {
            self.front.clone_from(&self.current);
        }
        if self.reverse.is_none() {
            self.reverse.clone_from(&self.current);
        }
    }

    fn show(&mut self, face: Face) {
        let image = match face {
            Face::Front => self.front.clone(),
            Face::Reverse => self.reverse.clone(),
        };
        if image.is_some() {
            self.current = image;
        }
    }
}

/// Swaps the displayed image on face changes, then forwards every event to
/// the caller's listener.
struct FaceSwapListener<D> {
    images: Rc<RefCell<CoinImages<D>>>,
    inner: Option<SharedListener>,
}

impl<D> FaceSwapListener<D> {
    fn forward(&self, event: impl FnOnce(&mut dyn TossListener)) {
        if let Some(inner) = &self.inner {
            event(&mut *inner.borrow_mut());
        }
    }
}

impl<D: Clone> TossListener for FaceSwapListener<D> {
    fn on_animation_start(&mut self, toss: &TossParams) {
        self.forward(|inner| inner.on_animation_start(toss));
    }

    fn on_face_change(&mut self, face: Face, toss: &TossParams) {
        self.images.borrow_mut().show(face);
        self.forward(|inner| inner.on_face_change(face, toss));
    }

    fn on_animation_repeat(&mut self, toss: &TossParams) {
        self.forward(|inner| inner.on_animation_repeat(toss));
    }

    fn on_animation_end(&mut self, toss: &TossParams) {
        self.forward(|inner| inner.on_animation_end(toss));
    }
}

/// Identity of a shared animation, for set semantics.
fn animation_key(animation: &SharedAnimation) -> usize {
    Rc::as_ptr(animation).cast::<()>() as usize
}

/// An image view that tosses a coin.
///
/// `D` is whatever the host uses for images (a texture handle, a path, a
/// name). The view never draws; the host reads [`image`](Self::image) and
/// [`transformation`](Self::transformation) after each
/// [`tick`](Self::tick).
///
/// Typical use:
///
/// 1. configure faces and parameters through the setters,
/// 2. optionally add secondary animations (e.g. a vertical flight),
/// 3. call [`start_toss`](Self::start_toss),
/// 4. call [`tick`](Self::tick) once per frame until it returns `false`.
pub struct CoinView<D> {
    params: TossParams,
    images: Rc<RefCell<CoinImages<D>>>,
    listener: Option<SharedListener>,
    secondary: FxHashMap<usize, SharedAnimation>,
    camera: CoinCamera,
    repeat_count: u32,
    size: (u32, u32),
    parent_size: (u32, u32),
    active: Option<AnimationSet>,
    transformation: Transformation,
}

impl<D: Clone + 'static> CoinView<D> {
    /// View with default parameters and no image.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: TossParams::default(),
            images: Rc::new(RefCell::new(CoinImages {
                current: None,
                front: None,
                reverse: None,
            })),
            listener: None,
            secondary: FxHashMap::default(),
            camera: CoinCamera::default(),
            repeat_count: 0,
            size: (0, 0),
            parent_size: (0, 0),
            active: None,
            transformation: Transformation::IDENTITY,
        }
    }

    /// View showing `image`, which also serves as both faces until they are
    /// set explicitly.
    #[must_use]
    pub fn with_image(image: D) -> Self {
        let mut view = Self::new();
        view.set_image(image);
        view
    }

    /// View configured from options. Fails on the first invalid attribute.
    pub fn from_options(
        image: Option<D>,
        options: &TossOptions,
    ) -> Result<Self, TossError> {
        let params = options.to_params()?;
        let mut view = Self::new();
        view.params = params;
        view.camera = CoinCamera::new(options.camera_distance);
        if let Some(image) = image {
            view.set_image(image);
        }
        Ok(view)
    }

    // -- Images --------------------------------------------------------------

    /// Replace the displayed image. Faces without an explicit image adopt it.
    pub fn set_image(&mut self, image: D) {
        let mut images = self.images.borrow_mut();
        images.current = Some(image);
        images.fill_unset_faces();
    }

    /// Image shown for the front face.
    pub fn set_front_image(&mut self, image: D) {
        self.images.borrow_mut().front = Some(image);
    }

    /// Image shown for the reverse face.
    pub fn set_reverse_image(&mut self, image: D) {
        self.images.borrow_mut().reverse = Some(image);
    }

    /// Currently displayed image.
    #[must_use]
    pub fn image(&self) -> Option<D> {
        self.images.borrow().current.clone()
    }

    /// Front face image.
    #[must_use]
    pub fn front_image(&self) -> Option<D> {
        self.images.borrow().front.clone()
    }

    /// Reverse face image.
    #[must_use]
    pub fn reverse_image(&self) -> Option<D> {
        self.images.borrow().reverse.clone()
    }

    // -- Parameters ----------------------------------------------------------

    /// Current toss parameters.
    #[must_use]
    pub fn params(&self) -> &TossParams {
        &self.params
    }

    /// Full turns per toss. Zero is rejected.
    pub fn set_circle_count(&mut self, count: u32) -> Result<(), TossError> {
        if count == 0 {
            return Err(TossError::InvalidCircleCount(count));
        }
        self.params.circle_count = count;
        Ok(())
    }

    /// Rotation sense around X. Magnitudes above one are rejected.
    pub fn set_x_axis_direction(
        &mut self,
        direction: i32,
    ) -> Result<(), TossError> {
        self.params.x_axis = AxisDirection::parse("x", direction)?;
        Ok(())
    }

    /// Rotation sense around Y. Magnitudes above one are rejected.
    pub fn set_y_axis_direction(
        &mut self,
        direction: i32,
    ) -> Result<(), TossError> {
        self.params.y_axis = AxisDirection::parse("y", direction)?;
        Ok(())
    }

    /// Rotation sense around Z. Magnitudes above one are rejected.
    pub fn set_z_axis_direction(
        &mut self,
        direction: i32,
    ) -> Result<(), TossError> {
        self.params.z_axis = AxisDirection::parse("z", direction)?;
        Ok(())
    }

    /// Landing face as `1` (front) or `-1` (reverse).
    pub fn set_result(&mut self, result: i32) -> Result<(), TossError> {
        self.params.result = Face::try_from(result)?;
        Ok(())
    }

    /// Landing face.
    pub fn set_outcome(&mut self, outcome: Face) {
        self.params.result = outcome;
    }

    /// Rotation length.
    pub fn set_duration(&mut self, duration: Duration) {
        self.params.duration = duration;
    }

    /// Delay before the rotation begins.
    pub fn set_start_offset(&mut self, start_offset: Duration) {
        self.params.start_offset = start_offset;
    }

    /// Extra rotations played after the first, each reported through
    /// [`TossListener::on_animation_repeat`].
    pub fn set_repeat_count(&mut self, repeat_count: u32) {
        self.repeat_count = repeat_count;
    }

    /// Extra rotations played after the first.
    #[must_use]
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Curve applied to rotation progress.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.params.easing = easing;
    }

    /// Projection camera used by future tosses.
    pub fn set_camera(&mut self, camera: CoinCamera) {
        self.camera = camera;
    }

    /// Receive the events of future tosses.
    pub fn set_listener(&mut self, listener: SharedListener) {
        self.listener = Some(listener);
    }

    /// View size in pixels; the rotation pivots on its centre.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Size of the parent layout, in pixels.
    pub fn set_parent_size(&mut self, width: u32, height: u32) {
        self.parent_size = (width, height);
    }

    // -- Secondary animations ------------------------------------------------

    /// Play `animation` alongside the rotation of future tosses. Adding the
    /// same animation twice keeps one copy.
    pub fn add_secondary_animation(&mut self, animation: SharedAnimation) {
        let _ = self.secondary.insert(animation_key(&animation), animation);
    }

    /// Whether `animation` is registered.
    #[must_use]
    pub fn contains_secondary_animation(
        &self,
        animation: &SharedAnimation,
    ) -> bool {
        self.secondary.contains_key(&animation_key(animation))
    }

    /// Number of registered secondary animations.
    #[must_use]
    pub fn secondary_animation_count(&self) -> usize {
        self.secondary.len()
    }

    /// Forget every secondary animation.
    pub fn clear_secondary_animations(&mut self) {
        self.secondary.clear();
    }

    // -- Playback ------------------------------------------------------------

    /// Abandon any running toss and start a new one from the current
    /// parameters and secondary animations.
    ///
    /// Playback begins on the next [`tick`](Self::tick).
    pub fn start_toss(&mut self) {
        self.clear_animation();

        let swap = FaceSwapListener {
            images: Rc::clone(&self.images),
            inner: self.listener.clone(),
        };
        let toss = TossAnimation::new(self.params.clone())
            .with_camera(self.camera)
            .with_repeat_count(self.repeat_count)
            .with_listener(Box::new(swap));

        let mut set = AnimationSet::new();
        set.add(shared(toss));
        for animation in self.secondary.values() {
            set.add(Rc::clone(animation));
        }
        let (width, height) = self.size;
        let (parent_width, parent_height) = self.parent_size;
        set.initialize(width, height, parent_width, parent_height);

        log::debug!(
            "starting toss: {} turns, result {}, {} secondary animation(s), \
             {:?} total",
            self.params.circle_count,
            self.params.result,
            self.secondary.len(),
            set.duration()
        );
        self.active = Some(set);
    }

    /// Advance the running toss to `now`.
    ///
    /// Returns whether the toss is still running afterwards. Once it has
    /// finished the transformation resets to identity.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(set) = self.active.as_mut() else {
            return false;
        };
        if let Some(frame) = set.tick(now) {
            self.transformation = frame;
        }
        if set.is_finished() {
            self.active = None;
            self.transformation = Transformation::IDENTITY;
            return false;
        }
        true
    }

    /// Cancel the running toss, if any. A toss that already started gets
    /// its end event.
    pub fn clear_animation(&mut self) {
        if let Some(mut set) = self.active.take() {
            set.cancel();
        }
        self.transformation = Transformation::IDENTITY;
    }

    /// Whether a toss is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Transform of the latest frame.
    #[must_use]
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }
}

impl<D: Clone + 'static> Default for CoinView<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for CoinView<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinView")
            .field("params", &self.params)
            .field("secondary", &self.secondary.len())
            .field("size", &self.size)
            .field("animating", &self.active.is_some())
            .finish_non_exhaustive()
    }
}
