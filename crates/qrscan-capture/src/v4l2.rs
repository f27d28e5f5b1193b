use crate::{CaptureError, ConstraintProfile, MediaSource, StreamHandle};
use qrscan_scan::{FrameBuffer, SampleError, VideoSurface};
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

const CHANNEL_DEPTH: usize = 4;

/// Configuration for the V4L2 media source.
#[derive(Clone, Debug)]
pub struct V4l2Config {
    device: String,
    fps: u32,
}

impl Default for V4l2Config {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            fps: 30,
        }
    }
}

impl V4l2Config {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    /// Set the requested frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// A captured 8-bit luma frame.
struct LumaFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

type FrameResult = Result<LumaFrame, CaptureError>;

/// V4L2-backed media source.
pub struct V4l2Source {
    config: V4l2Config,
}

impl V4l2Source {
    pub fn new(config: V4l2Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &V4l2Config {
        &self.config
    }
}

impl MediaSource for V4l2Source {
    type Stream = V4l2Stream;

    async fn acquire(&mut self, profile: &ConstraintProfile) -> Result<V4l2Stream, CaptureError> {
        // V4L2 carries no facing metadata; the configured device decides.
        log::debug!(
            "acquiring {} (facing hint {:?}, resolution hint {:?})",
            self.config.device(),
            profile.facing(),
            profile.resolution()
        );
        V4l2Stream::open(&self.config, profile)
    }
}

/// A live V4L2 stream.
///
/// A capture thread reads frames via mmap, converts them to luma, and feeds
/// a bounded channel; dropping the receiver stops the thread.
pub struct V4l2Stream {
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread: Option<JoinHandle<()>>,
    latest: Option<LumaFrame>,
    dimensions: (u32, u32),
    faulted: bool,
}

impl V4l2Stream {
    fn open(config: &V4l2Config, profile: &ConstraintProfile) -> Result<Self, CaptureError> {
        let device = Device::with_path(config.device())?;

        let format = Self::negotiate(&device, profile)?;
        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        let (width, height) = (format.width, format.height);
        let fourcc = format.fourcc;
        let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);

        let handle = thread::spawn(move || {
            if let Err(err) = capture_loop(device, fourcc, width, height, &tx) {
                // Surface the fault to the consumer; best effort if it is gone.
                let _ = tx.blocking_send(Err(err));
            }
        });

        Ok(Self {
            receiver: Some(rx),
            thread: Some(handle),
            latest: None,
            dimensions: (width, height),
            faulted: false,
        })
    }

    /// Two-tier format negotiation.
    ///
    /// With a resolution hint (the preferred profile) MJPEG is requested at
    /// that size; the driver may adjust the size, since resolution is a
    /// soft preference, but a fourcc change means the profile is
    /// unsatisfiable. Without a hint (the relaxed profile) the driver's
    /// current format is kept when usable, trying YUYV before giving up.
    fn negotiate(device: &Device, profile: &ConstraintProfile) -> Result<Format, CaptureError> {
        let mjpg = FourCC::new(b"MJPG");
        let yuyv = FourCC::new(b"YUYV");

        match profile.resolution() {
            Some((width, height)) => {
                let wanted = Format::new(width, height, mjpg);
                let actual = Capture::set_format(device, &wanted)?;
                if actual.fourcc != mjpg {
                    return Err(CaptureError::ConstraintsUnsatisfiable(format!(
                        "device selected {} instead of MJPG",
                        actual.fourcc
                    )));
                }
                if (actual.width, actual.height) != (width, height) {
                    log::info!(
                        "driver adjusted resolution to {}x{}",
                        actual.width,
                        actual.height
                    );
                }
                Ok(actual)
            }
            None => {
                let current = Capture::format(device)?;
                if current.fourcc == mjpg || current.fourcc == yuyv {
                    return Ok(current);
                }
                let wanted = Format::new(current.width, current.height, yuyv);
                let actual = Capture::set_format(device, &wanted)?;
                if actual.fourcc != yuyv {
                    return Err(CaptureError::ConstraintsUnsatisfiable(format!(
                        "no usable pixel format (device offers {})",
                        actual.fourcc
                    )));
                }
                Ok(actual)
            }
        }
    }

    /// Pull any frames the capture thread has queued, keeping the newest.
    fn drain(&mut self) -> Result<(), CaptureError> {
        let Some(receiver) = self.receiver.as_mut() else {
            return Ok(());
        };
        loop {
            match receiver.try_recv() {
                Ok(Ok(frame)) => {
                    self.dimensions = (frame.width, frame.height);
                    self.latest = Some(frame);
                }
                Ok(Err(err)) => return Err(err),
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    return Err(CaptureError::Channel("capture thread exited".to_string()));
                }
            }
        }
    }
}

impl StreamHandle for V4l2Stream {
    async fn ready(&mut self) -> Result<(u32, u32), CaptureError> {
        // Metadata is ready once the first frame arrives.
        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CaptureError::Channel("stream already stopped".to_string()))?;
        let frame = receiver
            .recv()
            .await
            .ok_or_else(|| CaptureError::Channel("capture thread exited".to_string()))??;
        self.dimensions = (frame.width, frame.height);
        self.latest = Some(frame);
        Ok(self.dimensions)
    }

    fn stop_tracks(&mut self) {
        // Dropping the receiver signals the capture thread to exit.
        drop(self.receiver.take());
        self.latest = None;
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl VideoSurface for V4l2Stream {
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn frame_ready(&mut self) -> bool {
        // A dead capture thread never recovers; log the fault once and go
        // quiet until the session is torn down.
        if self.faulted {
            return false;
        }
        if let Err(err) = self.drain() {
            log::warn!("capture stream fault: {err}");
            self.faulted = true;
            return false;
        }
        self.latest.is_some()
    }

    fn sample_into(&mut self, buf: &mut FrameBuffer) -> Result<(), SampleError> {
        let frame = self
            .latest
            .as_ref()
            .ok_or_else(|| SampleError("no frame available".to_string()))?;
        if (frame.width, frame.height) != (buf.width(), buf.height()) {
            return Err(SampleError("buffer does not match frame size".to_string()));
        }
        buf.as_mut_slice().copy_from_slice(&frame.data);
        Ok(())
    }
}

impl Drop for V4l2Stream {
    fn drop(&mut self) {
        self.stop_tracks();
    }
}

/// Background capture loop: read, convert to luma, send.
fn capture_loop(
    device: Device,
    fourcc: FourCC,
    width: u32,
    height: u32,
    tx: &mpsc::Sender<FrameResult>,
) -> Result<(), CaptureError> {
    let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, CHANNEL_DEPTH as u32)?;

    loop {
        let (data, _meta) = CaptureStream::next(&mut stream)?;
        let frame = match to_luma(data, fourcc, width, height) {
            Some(frame) => frame,
            None => {
                log::debug!("skipping malformed frame");
                continue;
            }
        };
        if tx.blocking_send(Ok(frame)).is_err() {
            // Receiver dropped: the stream was stopped.
            break;
        }
    }
    Ok(())
}

/// Convert a captured buffer to an 8-bit luma frame.
///
/// MJPEG frames carry their own dimensions, so a mid-stream resolution
/// change propagates through here.
fn to_luma(data: &[u8], fourcc: FourCC, width: u32, height: u32) -> Option<LumaFrame> {
    if fourcc == FourCC::new(b"MJPG") {
        let luma = image::load_from_memory(data).ok()?.into_luma8();
        let (width, height) = luma.dimensions();
        Some(LumaFrame {
            width,
            height,
            data: luma.into_raw(),
        })
    } else if fourcc == FourCC::new(b"YUYV") {
        yuyv_luma(data, width, height)
    } else {
        None
    }
}

/// Extract the Y plane from YUYV (YUV 4:2:2) data.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`; for a greyscale target luma is
/// every other byte, so no BT.601 matrix is involved.
fn yuyv_luma(data: &[u8], width: u32, height: u32) -> Option<LumaFrame> {
    let pixels = width as usize * height as usize;
    if data.len() < pixels * 2 {
        return None;
    }
    let mut luma = Vec::with_capacity(pixels);
    for chunk in data[..pixels * 2].chunks_exact(2) {
        luma.push(chunk[0]);
    }
    Some(LumaFrame {
        width,
        height,
        data: luma,
    })
}

#[cfg(test)]
mod tests {
    use super::{V4l2Stream, yuyv_luma};
    use qrscan_scan::VideoSurface;
    use tokio::sync::mpsc;

    #[test]
    fn test_capture_thread_exit_faults_once() {
        let (tx, rx) = mpsc::channel(1);
        drop(tx);

        let mut stream = V4l2Stream {
            receiver: Some(rx),
            thread: None,
            latest: None,
            dimensions: (640, 480),
            faulted: false,
        };

        // First tick observes the dead thread and latches the fault.
        assert!(!stream.frame_ready());
        assert!(stream.faulted);

        // Later ticks stay quiet instead of re-reporting.
        assert!(!stream.frame_ready());
        assert!(!stream.frame_ready());
    }

    #[test]
    fn test_yuyv_luma_extracts_y_plane() {
        // Two pixels: Y0=10 U=20 Y1=30 V=40.
        let data = [10u8, 20, 30, 40];
        let frame = yuyv_luma(&data, 2, 1).unwrap();
        assert_eq!(frame.data, vec![10, 30]);
        assert_eq!((frame.width, frame.height), (2, 1));
    }

    #[test]
    fn test_yuyv_luma_rejects_short_input() {
        let data = [0u8; 6];
        assert!(yuyv_luma(&data, 2, 2).is_none());
    }
}
