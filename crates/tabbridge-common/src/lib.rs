pub mod actions;
pub mod errors;
pub mod types;

pub use actions::TabCommand;
pub use errors::{BridgeError, ConfigError, ConnectionError, PlatformError};
pub use types::TabId;

pub type Result<T> = std::result::Result<T, BridgeError>;
