use crate::{FrameBuffer, ScanResult};
use std::fmt;

/// Failure to sample a frame out of a surface.
///
/// Always treated as transient by the scan loop: the cycle reschedules
/// without decoding.
#[derive(Debug)]
pub struct SampleError(pub String);

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample error: {}", self.0)
    }
}

impl std::error::Error for SampleError {}

/// Read side of an attached video stream.
pub trait VideoSurface {
    /// Native dimensions of the video, valid once the stream is ready.
    fn dimensions(&self) -> (u32, u32);

    /// Whether a full frame is available for sampling.
    fn frame_ready(&mut self) -> bool;

    /// Copy the current frame into `buf` as 8-bit luma.
    ///
    /// `buf` has already been sized to `dimensions()` when this is called.
    fn sample_into(&mut self, buf: &mut FrameBuffer) -> Result<(), SampleError>;
}

/// QR decoding capability. Pure and synchronous, no side effects.
pub trait QrDecode {
    /// Attempt to decode a QR code from 8-bit luma pixels.
    ///
    /// `try_invert` additionally attempts light-on-dark codes; the scan
    /// loop leaves it off.
    fn decode(&self, luma: &[u8], width: u32, height: u32, try_invert: bool) -> Option<String>;
}

/// Sink for detections: renders the decoded text and fires transient
/// feedback. Both operations are best-effort; implementations swallow their
/// own failures.
pub trait Feedback {
    fn show(&mut self, result: &ScanResult);
    fn pulse(&mut self);
}
