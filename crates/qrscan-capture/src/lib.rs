//! Camera stream lifecycle for the qrscan tool.
//!
//! The [`CaptureController`] owns acquisition with two-tier constraint
//! negotiation (ideal-first, relaxed-fallback), the single active
//! [`CameraSession`], and deterministic teardown. Backend implementations
//! plug in through the [`MediaSource`] / [`StreamHandle`] traits.

pub mod controller;
pub mod error;
pub mod profile;
pub mod session;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use controller::CaptureController;
pub use error::CaptureError;
pub use profile::{ConstraintProfile, Facing, FacingMode, ProfileKind};
pub use session::CameraSession;
pub use traits::{MediaSource, StreamHandle};

#[cfg(feature = "v4l2")]
pub use v4l2::{V4l2Config, V4l2Source, V4l2Stream};

/// Probe for an available capture backend.
///
/// Checked proactively at startup; without a backend the start action is
/// disabled entirely.
pub fn supported() -> Result<(), CaptureError> {
    #[cfg(feature = "v4l2")]
    {
        Ok(())
    }
    #[cfg(not(feature = "v4l2"))]
    {
        Err(CaptureError::Unsupported)
    }
}
