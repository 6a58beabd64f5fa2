//! The core channel: owns the core process and the raw line transport.
//!
//! One reader task decodes core stdout into [`Inbound`] messages and hands
//! them across a bounded queue to whatever single task owns the windows;
//! one writer task drains outbound [`Request`]s into core stdin. Nothing
//! here touches window state.

use std::path::Path;
use std::process::Stdio;

use futures_util::{SinkExt, StreamExt};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, warn};

use plume_common::ChannelError;

use crate::protocol::{Inbound, Request};

/// How many decoded notifications may sit between the reader task and the
/// shell loop before the reader waits. The core is trusted to pace itself;
/// this is a buffer, not flow control.
const INBOUND_QUEUE: usize = 256;

/// A live connection to a spawned core process.
#[derive(Debug)]
pub struct CoreChannel {
    child: Child,
    requests: mpsc::UnboundedSender<Request>,
}

impl CoreChannel {
    /// Spawn the core and start the reader/writer tasks.
    ///
    /// Returns the channel plus the inbound stream. The receiver is meant
    /// to be drained by exactly one task; per-tab ordering falls out of the
    /// global arrival order preserved here.
    pub fn spawn(
        core: &Path,
        args: &[String],
    ) -> Result<(Self, mpsc::Receiver<Inbound>), ChannelError> {
        let mut child = Command::new(core)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ChannelError::CoreNotFound(core.to_path_buf()),
                _ => ChannelError::SpawnFailed(e.to_string()),
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ChannelError::SpawnFailed("core stdout not captured".into()))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ChannelError::SpawnFailed("core stdin not captured".into()))?;

        let (inbound_tx, inbound_rx) = mpsc::channel(INBOUND_QUEUE);
        tokio::spawn(read_loop(stdout, inbound_tx));

        let (request_tx, request_rx) = mpsc::unbounded_channel();
        tokio::spawn(write_loop(stdin, request_rx));

        debug!(core = %core.display(), "core spawned");
        Ok((
            Self {
                child,
                requests: request_tx,
            },
            inbound_rx,
        ))
    }

    /// Handle for submitting outbound requests; see [`crate::Dispatcher`].
    pub fn request_sender(&self) -> mpsc::UnboundedSender<Request> {
        self.requests.clone()
    }

    /// Kill the core process and reap it.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.child.kill().await {
            debug!(error = %e, "core already gone at shutdown");
        }
    }
}

async fn read_loop(stdout: ChildStdout, tx: mpsc::Sender<Inbound>) {
    let mut lines = FramedRead::new(stdout, LinesCodec::new());
    while let Some(item) = lines.next().await {
        let msg = match item {
            Ok(line) => Inbound::decode(&line),
            Err(e) => {
                warn!(error = %e, "core stdout read failed");
                break;
            }
        };
        if tx.send(msg).await.is_err() {
            // Shell loop is gone; nothing left to route to.
            break;
        }
    }
    debug!("core channel reader finished");
}

async fn write_loop(stdin: ChildStdin, mut rx: mpsc::UnboundedReceiver<Request>) {
    let mut sink = FramedWrite::new(stdin, LinesCodec::new());
    while let Some(request) = rx.recv().await {
        let line = request.to_line();
        if let Err(e) = sink.send(line).await {
            // Fire-and-forget contract: callers never see transport failure.
            debug!(error = %e, method = %request.method, "core stdin write failed");
            break;
        }
    }
    debug!("core channel writer finished");
}
