use std::fmt;
use std::io;

const EPERM: i32 = 1;
const ENOENT: i32 = 2;
const ENXIO: i32 = 6;
const EACCES: i32 = 13;
const EBUSY: i32 = 16;
const ENODEV: i32 = 19;

/// Capture failure taxonomy, by cause.
#[derive(Debug)]
pub enum CaptureError {
    /// Camera access refused; the user can grant access and retry.
    PermissionDenied(String),
    /// No camera hardware available.
    DeviceNotFound(String),
    /// The camera is held by another consumer.
    DeviceBusy(String),
    /// The requested constraint profile is not satisfiable by the device.
    /// Never surfaced from the preferred attempt; triggers the fallback.
    ConstraintsUnsatisfiable(String),
    /// Access blocked by system policy rather than file permissions.
    PolicyBlocked(String),
    /// No capture backend is available on this build or platform.
    Unsupported,
    /// Backend stream fault.
    Stream(String),
    /// Backend channel fault.
    Channel(String),
}

impl CaptureError {
    /// Whether the user can plausibly correct the failure and retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CaptureError::PermissionDenied(_) | CaptureError::DeviceBusy(_)
        )
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied(msg) => {
                write!(f, "camera access denied: {msg} (grant access and retry)")
            }
            CaptureError::DeviceNotFound(msg) => write!(f, "no camera found: {msg}"),
            CaptureError::DeviceBusy(msg) => {
                write!(f, "camera busy: {msg} (free the device and retry)")
            }
            CaptureError::ConstraintsUnsatisfiable(msg) => {
                write!(f, "constraints unsatisfiable: {msg}")
            }
            CaptureError::PolicyBlocked(msg) => {
                write!(f, "camera access blocked by system policy: {msg}")
            }
            CaptureError::Unsupported => write!(f, "no camera capture backend available"),
            CaptureError::Stream(msg) => write!(f, "stream error: {msg}"),
            CaptureError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<io::Error> for CaptureError {
    /// Classify an I/O error from a device operation into the taxonomy.
    fn from(err: io::Error) -> Self {
        let msg = err.to_string();
        match err.raw_os_error() {
            Some(EACCES) => CaptureError::PermissionDenied(msg),
            Some(EPERM) => CaptureError::PolicyBlocked(msg),
            Some(ENOENT) | Some(ENXIO) | Some(ENODEV) => CaptureError::DeviceNotFound(msg),
            Some(EBUSY) => CaptureError::DeviceBusy(msg),
            Some(_) => CaptureError::Stream(msg),
            None => match err.kind() {
                io::ErrorKind::PermissionDenied => CaptureError::PermissionDenied(msg),
                io::ErrorKind::NotFound => CaptureError::DeviceNotFound(msg),
                _ => CaptureError::Stream(msg),
            },
        }
    }
}
