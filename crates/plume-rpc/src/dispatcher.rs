//! Outbound request construction.

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

use crate::protocol::Request;

/// Builds outbound requests and hands them to the core channel's writer.
///
/// Fire-and-forget: no return value, no delivery confirmation, no timeout,
/// no retry. A dead transport is logged here and otherwise invisible to the
/// caller. Cheap to clone; every window controller holds one.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    requests: mpsc::UnboundedSender<Request>,
}

impl Dispatcher {
    pub fn new(requests: mpsc::UnboundedSender<Request>) -> Self {
        Self { requests }
    }

    /// Send a named command with parameters to the core.
    pub fn send(&self, method: impl Into<String>, params: Value) {
        let request = Request::new(method, params);
        if self.requests.send(request).is_err() {
            debug!("core channel closed; request dropped");
        }
    }
}
