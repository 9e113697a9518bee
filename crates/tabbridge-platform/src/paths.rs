use std::path::PathBuf;

use tabbridge_common::PlatformError;

const APP_NAME: &str = "tabbridge";

/// Platform configuration directory for tabbridge.
///
/// - macOS: `~/Library/Application Support/tabbridge`
/// - Linux: `$XDG_CONFIG_HOME/tabbridge` (defaults to `~/.config/tabbridge`)
/// - Windows: `%APPDATA%\tabbridge`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform cache directory for tabbridge.
pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::cache_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine cache directory".into()))?
        .join(APP_NAME))
}

/// Default root cache directory handed to the engine.
pub fn engine_cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(cache_dir()?.join("engine"))
}

/// Resolve the configured engine cache path. Empty means [`engine_cache_dir`].
pub fn resolve_engine_cache(configured: &str) -> Result<PathBuf, PlatformError> {
    let configured = configured.trim();
    if configured.is_empty() {
        engine_cache_dir()
    } else {
        Ok(PathBuf::from(configured))
    }
}
