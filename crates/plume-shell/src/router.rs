//! Inbound notification routing.

use slab::Slab;
use tracing::{debug, warn};

use plume_rpc::Inbound;

use crate::alert::AlertPresenter;
use crate::registry::WindowRegistry;
use crate::window::WindowController;

/// Route one decoded notification to its recipient.
///
/// Runs on the coordinator task, after the decode step on the reader side.
/// Every arm either forwards or logs-and-drops; nothing here panics,
/// retries, buffers, or propagates. The router itself is stateless: all
/// state lives in the registry and the window arena.
pub fn route(
    msg: Inbound,
    registry: &WindowRegistry,
    windows: &mut Slab<WindowController>,
    alerts: &mut dyn AlertPresenter,
) {
    match msg {
        Inbound::Update { tab, update } => {
            let Some(id) = registry.lookup(&tab) else {
                // Expected race: the window closed while this was in flight.
                debug!(tab = %tab, "update for unregistered tab dropped");
                return;
            };
            match windows.get_mut(id.0) {
                Some(window) => window.apply_update(update),
                // Lifecycle events own the registry; a stale entry is only
                // logged here, never repaired mid-route.
                None => warn!(tab = %tab, "registry entry points at a vacant window slot"),
            }
        }
        Inbound::Alert { msg } => alerts.present(&msg),
        Inbound::Unknown { method } => {
            warn!(method = %method, "unknown method from core");
        }
        Inbound::Malformed { reason } => {
            warn!(reason = %reason, "malformed message from core");
        }
    }
}
