use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::io::{self, Write};

/// Both copy paths failed.
#[derive(Debug)]
pub struct ClipboardError(String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard unavailable: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// Which copy mechanism succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// The system clipboard took the text.
    System,
    /// The terminal was asked to copy via OSC 52.
    Osc52,
}

/// Copy `text` to the clipboard.
///
/// Tries the system clipboard first; when that is unavailable (headless
/// session, missing display server) falls back to emitting an OSC 52
/// sequence, which asks the terminal itself to place the text on the
/// selection. An error surfaces only when both paths fail.
pub fn copy(text: &str) -> Result<CopyPath, ClipboardError> {
    match system_copy(text) {
        Ok(()) => return Ok(CopyPath::System),
        Err(err) => log::debug!("system clipboard failed: {err}"),
    }
    osc52_copy(text).map(|()| CopyPath::Osc52)
}

fn system_copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

fn osc52_copy(text: &str) -> Result<(), ClipboardError> {
    let sequence = osc52_sequence(text);
    let mut out = io::stdout();
    out.write_all(sequence.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| ClipboardError(err.to_string()))
}

/// OSC 52 set-clipboard sequence: `ESC ] 52 ; c ; <base64 payload> BEL`.
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::osc52_sequence;

    #[test]
    fn test_osc52_sequence_payload() {
        let seq = osc52_sequence("ALPHA123");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        assert_eq!(payload, "QUxQSEExMjM=");
    }

    #[test]
    fn test_osc52_sequence_empty_text() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }
}
