//! The plume desktop shell.
//!
//! A thin front end for the plume-core editing engine: it spawns the core,
//! keeps one window per open document, and routes notifications between
//! the core and the right window. Everything that edits text lives in the
//! core; everything that draws lives above this crate. What remains here
//! is the window registry, the event router, and the request path.

pub mod alert;
pub mod boot;
pub mod cli;
pub mod registry;
pub mod router;
pub mod shell;
pub mod window;

pub use registry::{WindowId, WindowRegistry};
pub use shell::{Shell, ShellCommand};
pub use window::WindowController;
