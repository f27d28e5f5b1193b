use qrscan_scan::{Feedback, ScanResult};
use std::io::{self, Write};

/// Terminal feedback surface: prints the decoded text on a highlighted
/// line and rings the bell on detection. All best-effort; write failures
/// are swallowed.
pub struct TerminalFeedback;

impl TerminalFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl Feedback for TerminalFeedback {
    fn show(&mut self, result: &ScanResult) {
        // Reverse-video tag so repeated detections stay visible.
        let _ = writeln!(io::stdout(), "\x1b[7m scan \x1b[0m {}", result.text());
    }

    fn pulse(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
