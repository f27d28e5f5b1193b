use std::time::Instant;

/// A decoded QR payload and the instant it was detected.
///
/// Transient: each detection produces a fresh value and the caller keeps at
/// most the latest one.
#[derive(Debug, Clone)]
pub struct ScanResult {
    text: String,
    detected_at: Instant,
}

impl ScanResult {
    pub fn new(text: String) -> Self {
        Self {
            text,
            detected_at: Instant::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detected_at(&self) -> Instant {
        self.detected_at
    }
}
