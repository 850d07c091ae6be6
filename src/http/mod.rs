//! Process lifecycle: binding the listener, serving, and signal-driven shutdown.
//!
//! The server handles one request at a time on a single listener and stops
//! cleanly on SIGINT/SIGTERM, releasing the socket before it returns.

mod server;
mod shutdown;

pub use server::{start_server, LifecycleState, ServerError, Sidecar};
pub use shutdown::shutdown_signal;
