//! User-facing alert presentation.

use std::io::{BufRead, Write};

/// Seam for the one process-global interruption the core can request.
///
/// Presentation deliberately blocks the coordinator task until the user
/// dismisses it; core notifications that need acknowledgment are rare and
/// treated as synchronous interruptions.
pub trait AlertPresenter {
    fn present(&mut self, msg: &str);
}

/// Terminal-backed presenter: prints the message and waits for Enter.
#[derive(Debug, Default)]
pub struct TerminalAlert;

impl AlertPresenter for TerminalAlert {
    fn present(&mut self, msg: &str) {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = writeln!(out, "\n[plume] {msg}");
        let _ = write!(out, "press Enter to continue... ");
        let _ = out.flush();

        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }
}
