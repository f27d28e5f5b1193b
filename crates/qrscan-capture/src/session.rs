use crate::{ProfileKind, StreamHandle};
use qrscan_scan::ScanTask;

/// One live camera session.
///
/// Owns the stream handle and the scan task token. At most one exists per
/// controller; dropping it cancels the pending scan cycle before stopping
/// the tracks, so a stale cycle can never sample a torn-down stream and a
/// stream handle can never outlive its teardown.
pub struct CameraSession<S: StreamHandle> {
    stream: S,
    kind: ProfileKind,
    task: ScanTask,
}

impl<S: StreamHandle> CameraSession<S> {
    pub(crate) fn new(stream: S, kind: ProfileKind) -> Self {
        Self {
            stream,
            kind,
            task: ScanTask::new(),
        }
    }

    /// Which constraint profile the stream was acquired with.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Token for this session's scan cycles.
    pub fn task(&self) -> ScanTask {
        self.task.clone()
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }
}

impl<S: StreamHandle> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.task.cancel();
        self.stream.stop_tracks();
    }
}
