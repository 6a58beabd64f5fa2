//! JSON notification plumbing between the shell and the core process.
//!
//! The core owns all editing logic and runs as a separate process; this
//! crate spawns it, frames newline-delimited JSON both ways, decodes every
//! inbound line into a typed [`Inbound`] message, and exposes the
//! fire-and-forget [`Dispatcher`] for outbound requests.

pub mod channel;
pub mod dispatcher;
pub mod protocol;

pub use channel::CoreChannel;
pub use dispatcher::Dispatcher;
pub use protocol::{Inbound, Request};
