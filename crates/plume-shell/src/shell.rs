//! The shell coordinator: owns every window and drains both queues.

use std::path::{Path, PathBuf};

use slab::Slab;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use plume_rpc::{Dispatcher, Inbound};

use crate::alert::AlertPresenter;
use crate::registry::{WindowId, WindowRegistry};
use crate::router;
use crate::window::WindowController;

/// Process-level entry points, delivered over a channel so that all window
/// and registry mutation stays on the coordinator task.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// "New document" menu action.
    NewWindow,
    /// OS open-file event or explicit "open" action.
    OpenFile(PathBuf),
    /// A window finished closing.
    CloseWindow(WindowId),
    Shutdown,
}

/// Owns the window arena, the registry, and the shared dispatcher.
///
/// Exactly one task runs [`Shell::run`]; it is the single writer for all
/// state here, so none of it needs locking. Decode happens upstream on the
/// channel's reader task; mutation happens only here.
pub struct Shell {
    dispatcher: Dispatcher,
    registry: WindowRegistry,
    windows: Slab<WindowController>,
    focused: Option<WindowId>,
    alerts: Box<dyn AlertPresenter + Send>,
}

impl Shell {
    pub fn new(dispatcher: Dispatcher, alerts: Box<dyn AlertPresenter + Send>) -> Self {
        Self {
            dispatcher,
            registry: WindowRegistry::new(),
            windows: Slab::new(),
            focused: None,
            alerts,
        }
    }

    /// Create, register, and focus a new document window.
    pub fn new_window(&mut self) -> WindowId {
        let controller = WindowController::new(self.dispatcher.clone());
        let tab = controller.tab().clone();
        let id = WindowId(self.windows.insert(controller));
        self.registry.register(tab.clone(), id);
        self.focused = Some(id);
        debug!(tab = %tab, "window opened");
        id
    }

    /// Close a window: unregister first so nothing routes to it anymore,
    /// then drop the controller out of the arena.
    pub fn close_window(&mut self, id: WindowId) {
        let Some(controller) = self.windows.try_remove(id.0) else {
            return;
        };
        self.registry.unregister(controller.tab());
        if self.focused == Some(id) {
            self.focused = self.windows.iter().next().map(|(key, _)| WindowId(key));
        }
        debug!(tab = %controller.tab(), "window closed");
    }

    /// Open a file, reusing the focused window while it is still empty.
    pub fn open_file(&mut self, path: &Path) {
        let reusable = self
            .focused
            .filter(|id| self.windows.get(id.0).is_some_and(WindowController::is_empty));
        let id = match reusable {
            Some(id) => id,
            None => self.new_window(),
        };
        if let Some(window) = self.windows.get_mut(id.0) {
            window.open_file(path);
        }
        self.focused = Some(id);
    }

    /// Route one inbound notification.
    pub fn handle_inbound(&mut self, msg: Inbound) {
        router::route(msg, &self.registry, &mut self.windows, self.alerts.as_mut());
    }

    /// Apply one process-level command. Returns `false` on shutdown.
    pub fn handle_command(&mut self, cmd: ShellCommand) -> bool {
        match cmd {
            ShellCommand::NewWindow => {
                self.new_window();
            }
            ShellCommand::OpenFile(path) => self.open_file(&path),
            ShellCommand::CloseWindow(id) => self.close_window(id),
            ShellCommand::Shutdown => return false,
        }
        true
    }

    /// Drain both queues until shutdown.
    ///
    /// The inbound arm processes messages one at a time in the core's
    /// arrival order, with no reordering and no parallel fan-out, so
    /// per-tab ordering follows from global channel ordering.
    pub async fn run(
        mut self,
        mut inbound: mpsc::Receiver<Inbound>,
        mut commands: mpsc::Receiver<ShellCommand>,
    ) {
        loop {
            tokio::select! {
                msg = inbound.recv() => match msg {
                    Some(msg) => self.handle_inbound(msg),
                    None => {
                        warn!("core channel closed");
                        break;
                    }
                },
                cmd = commands.recv() => match cmd {
                    Some(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    None => break,
                },
            }
        }
        info!("shell loop finished");
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowController> {
        self.windows.get(id.0)
    }

    pub fn registered_tabs(&self) -> usize {
        self.registry.len()
    }
}
