use crate::{CaptureError, ConstraintProfile};
use qrscan_scan::VideoSurface;

/// Media acquisition capability.
///
/// Given a constraint profile, asynchronously produces a live stream or
/// fails with a [`CaptureError`] naming the cause.
#[allow(async_fn_in_trait)]
pub trait MediaSource {
    type Stream: StreamHandle;

    async fn acquire(
        &mut self,
        profile: &ConstraintProfile,
    ) -> Result<Self::Stream, CaptureError>;
}

/// A live, attached video stream.
///
/// `ready` resolves once stream metadata (native dimensions) is available
/// and frames are flowing; only then may the stream be sampled through its
/// [`VideoSurface`] impl. Implementations also release the device when
/// dropped, so an unready stream cannot leak hardware.
#[allow(async_fn_in_trait)]
pub trait StreamHandle: VideoSurface {
    async fn ready(&mut self) -> Result<(u32, u32), CaptureError>;

    /// Stop every underlying track and release the device. Idempotent.
    fn stop_tracks(&mut self);
}
