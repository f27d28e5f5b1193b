//! qrscan: continuous camera QR scanner for the terminal.
//!
//! Commands on stdin: `start`, `stop`, `copy`, `quit`. The scan loop runs
//! one decode cycle per refresh tick while a session is active; detections
//! are printed as they happen and the latest one can be copied to the
//! clipboard.

mod clipboard;
mod feedback;
mod logging;

use feedback::TerminalFeedback;
use qrscan_capture::{CaptureController, V4l2Config, V4l2Source};
use qrscan_scan::{RqrrDecoder, ScanLoop, ScanTask};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Duration};

/// One decode cycle per tick, roughly display refresh rate.
const TICK: Duration = Duration::from_millis(16);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // Proactive capability check; without a backend there is nothing to start.
    if let Err(err) = qrscan_capture::supported() {
        log::error!("{err}");
        return Err(err.into());
    }

    let device = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/video0".to_string());
    let source = V4l2Source::new(V4l2Config::default().with_device(device));

    let mut controller = CaptureController::new(source);
    let mut scan = ScanLoop::new(RqrrDecoder::new(), TerminalFeedback::new(), ScanTask::new());

    log::info!("commands: start, stop, copy, quit");

    let mut ticks = time::interval(TICK);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                if let Some(session) = controller.session_mut() {
                    scan.cycle(session.stream_mut());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" => {}
                    "start" => match controller.start().await {
                        Ok(()) => {
                            if let Some(session) = controller.session() {
                                scan.rebind(session.task());
                                log::info!("scanning ({:?} profile)", session.kind());
                            }
                        }
                        // Every failure lands in the one message slot; start
                        // stays available for another attempt.
                        Err(err) => log::error!("start failed: {err}"),
                    },
                    "stop" => controller.stop(),
                    "copy" => match scan.last_result() {
                        Some(result) => match clipboard::copy(result.text()) {
                            Ok(path) => log::info!("copied via {path:?}"),
                            Err(err) => log::error!("{err}"),
                        },
                        None => log::info!("nothing scanned yet"),
                    },
                    "quit" => break,
                    other => log::warn!("unknown command: {other}"),
                }
            }
        }
    }

    // Explicit teardown releases the camera before exit.
    controller.stop();
    Ok(())
}
