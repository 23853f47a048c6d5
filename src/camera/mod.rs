//! Camera-based projection of 3D coin rotations onto the view plane.

/// Perspective camera producing homogeneous 2D matrices.
pub mod core;

pub use self::core::{CoinCamera, DEFAULT_CAMERA_DISTANCE};
