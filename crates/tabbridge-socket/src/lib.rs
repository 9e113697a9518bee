//! Outbound WebSocket connection owned by a dedicated I/O thread.
//!
//! [`ConnectionManager`] is the only entry point. Sends are fire-and-forget:
//! nothing is buffered while disconnected and failures are logged, never
//! returned.

mod manager;
mod state;
mod worker;


pub use manager::ConnectionManager;
pub use state::ConnectionState;
