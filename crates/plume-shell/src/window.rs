//! Per-document window controller.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::debug;

use plume_common::TabId;
use plume_rpc::Dispatcher;

/// Owns one document's view-model state and issues its outbound requests.
///
/// Rendering lives behind the presentation layer, not here; this tracks
/// exactly what routing and the open-file policy need. Updates mutate this
/// only from the coordinator task.
#[derive(Debug)]
pub struct WindowController {
    tab: TabId,
    dispatcher: Dispatcher,
    filename: Option<PathBuf>,
    /// Whether the document has no content the user could lose. Update
    /// payloads carry a `pristine` flag; a fresh window counts as pristine
    /// until the core says otherwise.
    pristine: bool,
    updates_applied: u64,
    last_update: Option<Value>,
}

impl WindowController {
    /// Create a controller with a fresh tab id.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_tab(TabId::new(), dispatcher)
    }

    pub fn with_tab(tab: TabId, dispatcher: Dispatcher) -> Self {
        Self {
            tab,
            dispatcher,
            filename: None,
            pristine: true,
            updates_applied: 0,
            last_update: None,
        }
    }

    pub fn tab(&self) -> &TabId {
        &self.tab
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Entry point for routed `update` notifications. The payload passes
    /// through structurally unchanged; only the `pristine` flag is read.
    pub fn apply_update(&mut self, update: Value) {
        self.pristine = update
            .get("pristine")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        self.updates_applied += 1;
        self.last_update = Some(update);
    }

    /// True while nothing distinguishes this window from a brand new one;
    /// the open-file policy reuses such windows instead of spawning more.
    pub fn is_empty(&self) -> bool {
        self.pristine && self.filename.is_none()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Send a request on behalf of this document. Object params get the
    /// tab merged in so the core can attribute the request.
    pub fn send_request(&self, method: &str, params: Value) {
        let params = match params {
            Value::Object(mut map) => {
                map.insert("tab".into(), Value::String(self.tab.as_str().to_owned()));
                Value::Object(map)
            }
            other => other,
        };
        self.dispatcher.send(method, params);
    }

    /// Point this window at a file and ask the core to load it.
    pub fn open_file(&mut self, path: &Path) {
        debug!(tab = %self.tab, path = %path.display(), "opening file");
        self.set_filename(path);
        self.send_request("open", json!({ "filename": path.display().to_string() }));
    }

    /// How many updates have been forwarded to this window.
    pub fn updates_applied(&self) -> u64 {
        self.updates_applied
    }

    /// The most recently applied update payload.
    pub fn last_update(&self) -> Option<&Value> {
        self.last_update.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn controller() -> (WindowController, mpsc::UnboundedReceiver<plume_rpc::Request>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            WindowController::with_tab("T1".into(), Dispatcher::new(tx)),
            rx,
        )
    }

    #[test]
    fn fresh_window_is_empty() {
        let (window, _rx) = controller();
        assert!(window.is_empty());
        assert_eq!(window.updates_applied(), 0);
    }

    #[test]
    fn setting_a_filename_ends_emptiness() {
        let (mut window, _rx) = controller();
        window.set_filename("/tmp/a.txt");
        assert!(!window.is_empty());
        assert_eq!(window.filename(), Some(Path::new("/tmp/a.txt")));
    }

    #[test]
    fn update_payload_passes_through_unchanged() {
        let (mut window, _rx) = controller();
        let payload = json!({"rev": 3, "lines": ["a", "b"]});

        window.apply_update(payload.clone());

        assert_eq!(window.updates_applied(), 1);
        assert_eq!(window.last_update(), Some(&payload));
    }

    #[test]
    fn pristine_flag_drives_emptiness() {
        let (mut window, _rx) = controller();

        window.apply_update(json!({"rev": 1, "pristine": false}));
        assert!(!window.is_empty());

        window.apply_update(json!({"rev": 2, "pristine": true}));
        assert!(window.is_empty());
    }

    #[test]
    fn update_without_pristine_flag_counts_as_content() {
        let (mut window, _rx) = controller();
        window.apply_update(json!({"rev": 1}));
        assert!(!window.is_empty());
    }

    #[test]
    fn send_request_merges_the_tab_into_object_params() {
        let (window, mut rx) = controller();

        window.send_request("scroll", json!({"first": 0, "last": 10}));

        let request = rx.try_recv().unwrap();
        assert_eq!(request.method, "scroll");
        assert_eq!(request.params["tab"], "T1");
        assert_eq!(request.params["first"], 0);
        assert_eq!(request.params["last"], 10);
    }

    #[test]
    fn send_request_leaves_non_object_params_alone() {
        let (window, mut rx) = controller();

        window.send_request("ping", Value::Null);

        let request = rx.try_recv().unwrap();
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn open_file_sets_filename_and_sends_open() {
        let (mut window, mut rx) = controller();

        window.open_file(Path::new("/tmp/notes.md"));

        assert_eq!(window.filename(), Some(Path::new("/tmp/notes.md")));
        assert!(!window.is_empty());

        let request = rx.try_recv().unwrap();
        assert_eq!(request.method, "open");
        assert_eq!(request.params["filename"], "/tmp/notes.md");
        assert_eq!(request.params["tab"], "T1");
    }
}
