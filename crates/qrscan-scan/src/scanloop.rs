use crate::traits::{Feedback, QrDecode, VideoSurface};
use crate::{FrameBuffer, ScanResult, ScanTask};

/// Outcome of one decode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// The task was cancelled; nothing was sampled. The driver stops.
    Cancelled,
    /// No frame was available (or sampling failed); try again next tick.
    Idle,
    /// A frame was sampled but no code was found.
    Miss,
    /// A code was decoded and emitted.
    Hit,
}

/// The per-tick decode cycle.
///
/// The host resumes it once per refresh tick via [`ScanLoop::cycle`]; each
/// cycle finishes before the next can be scheduled, so at most one is ever
/// outstanding. A hit never stops the loop — scanning continues until the
/// task is cancelled, and repeated detections of the same code simply
/// re-emit it.
pub struct ScanLoop<D, F> {
    buffer: FrameBuffer,
    decoder: D,
    feedback: F,
    task: ScanTask,
    last: Option<ScanResult>,
}

impl<D: QrDecode, F: Feedback> ScanLoop<D, F> {
    pub fn new(decoder: D, feedback: F, task: ScanTask) -> Self {
        Self {
            buffer: FrameBuffer::new(),
            decoder,
            feedback,
            task,
            last: None,
        }
    }

    /// The most recent detection, if any. Superseded by every new hit.
    pub fn last_result(&self) -> Option<&ScanResult> {
        self.last.as_ref()
    }

    /// Bind the loop to a new session's cancellation token.
    pub fn rebind(&mut self, task: ScanTask) {
        self.task = task;
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Run one decode cycle against `surface`.
    pub fn cycle(&mut self, surface: &mut impl VideoSurface) -> Cycle {
        if self.task.is_cancelled() {
            return Cycle::Cancelled;
        }
        if !surface.frame_ready() {
            return Cycle::Idle;
        }
        let (width, height) = surface.dimensions();
        if self.buffer.ensure_size(width, height) {
            log::debug!("frame buffer resized to {width}x{height}");
        }
        if let Err(err) = surface.sample_into(&mut self.buffer) {
            // Transient: reschedule without decoding.
            log::debug!("frame sampling failed: {err}");
            return Cycle::Idle;
        }
        // Inversion attempts stay off: real-world targets are dark-on-light
        // and the extra pass costs a full frame scan.
        match self
            .decoder
            .decode(self.buffer.as_slice(), width, height, false)
        {
            Some(text) => {
                let result = ScanResult::new(text);
                self.feedback.show(&result);
                self.feedback.pulse();
                self.last = Some(result);
                Cycle::Hit
            }
            None => Cycle::Miss,
        }
    }
}
