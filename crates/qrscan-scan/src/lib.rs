//! Frame scanning for the qrscan tool.
//!
//! This crate provides the decode cycle: a reusable greyscale frame buffer,
//! a cancellation token, and a tick-driven scan loop that samples a video
//! surface and feeds the pixels to a QR decoder.

pub mod buffer;
pub mod decoder;
pub mod result;
pub mod scanloop;
pub mod task;
pub mod traits;

pub use buffer::FrameBuffer;
pub use decoder::RqrrDecoder;
pub use result::ScanResult;
pub use scanloop::{Cycle, ScanLoop};
pub use task::ScanTask;
pub use traits::{Feedback, QrDecode, SampleError, VideoSurface};
