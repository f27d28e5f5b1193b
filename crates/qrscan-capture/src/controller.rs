use crate::{CameraSession, CaptureError, ConstraintProfile, MediaSource, ProfileKind, StreamHandle};

/// Owns the camera stream lifecycle: acquisition with preferred and
/// fallback constraint profiles, the metadata-ready wait, and teardown.
pub struct CaptureController<M: MediaSource> {
    source: M,
    session: Option<CameraSession<M::Stream>>,
}

impl<M: MediaSource> CaptureController<M> {
    pub fn new(source: M) -> Self {
        Self {
            source,
            session: None,
        }
    }

    /// Start a session.
    ///
    /// Any active session is torn down first. Acquisition tries the
    /// preferred profile; if that fails specifically because the
    /// constraints are unsatisfiable, exactly one fallback acquisition with
    /// the relaxed profile is made before any error surfaces. The session
    /// is created only after the stream reports its metadata ready. On
    /// failure no session exists and `start` may be called again.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        self.stop();

        let (mut stream, kind) = match self.source.acquire(&ConstraintProfile::preferred()).await {
            Ok(stream) => (stream, ProfileKind::Preferred),
            Err(CaptureError::ConstraintsUnsatisfiable(reason)) => {
                log::info!("preferred constraints unsatisfiable ({reason}), retrying relaxed");
                let stream = self.source.acquire(&ConstraintProfile::fallback()).await?;
                (stream, ProfileKind::Fallback)
            }
            Err(err) => return Err(err),
        };

        let (width, height) = stream.ready().await?;
        log::info!("camera session started at {width}x{height}");

        self.session = Some(CameraSession::new(stream, kind));
        Ok(())
    }

    /// Stop the active session, if any.
    ///
    /// Cancels the pending scan cycle, stops every track, and clears the
    /// session state. A no-op when no session is active.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            log::info!("camera session stopped");
        }
    }

    pub fn session(&self) -> Option<&CameraSession<M::Stream>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut CameraSession<M::Stream>> {
        self.session.as_mut()
    }
}

impl<M: MediaSource> Drop for CaptureController<M> {
    /// Deterministic hardware release on shutdown.
    fn drop(&mut self) {
        self.stop();
    }
}
