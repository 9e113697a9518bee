//! Engine start-up settings resolved from config.

use std::path::PathBuf;

use tabbridge_config::schema::{BridgeConfig, WindowConfig};

/// Everything the engine needs before the first browser is created.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub initial_url: String,
    pub cache_path: PathBuf,
    pub switches: Vec<String>,
    pub no_sandbox: bool,
    pub javascript: bool,
    pub local_storage: bool,
    pub databases: bool,
    pub webgl: bool,
    pub window: WindowConfig,
}

impl EngineSettings {
    pub fn from_config(config: &BridgeConfig) -> Self {
        let engine = &config.engine;
        let cache_path = tabbridge_platform::resolve_engine_cache(&engine.cache_path)
            .unwrap_or_else(|e| {
                let fallback = std::env::temp_dir().join("tabbridge-engine");
                tracing::warn!(
                    fallback = %fallback.display(),
                    "could not resolve engine cache dir: {e}"
                );
                fallback
            });

        Self {
            initial_url: engine.initial_url.clone(),
            cache_path,
            switches: engine.switches.clone(),
            no_sandbox: engine.no_sandbox,
            javascript: engine.javascript,
            local_storage: engine.local_storage,
            databases: engine.databases,
            webgl: engine.webgl,
            window: config.window.clone(),
        }
    }

    /// Switches in command-line form (`--disable-gpu`).
    pub fn command_line(&self) -> Vec<String> {
        let mut args: Vec<String> = self.switches.iter().map(|s| format!("--{s}")).collect();
        if self.no_sandbox {
            args.push("--no-sandbox".into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shell() {
        let settings = EngineSettings::from_config(&BridgeConfig::default());
        assert_eq!(settings.initial_url, "https://www.google.com");
        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, 768);
        assert_eq!(settings.window.title, "Lightweight Browser");
        assert!(settings.webgl);
        assert!(settings.cache_path.ends_with("engine") || settings.cache_path.ends_with("tabbridge-engine"));
    }

    #[test]
    fn explicit_cache_path_is_used() {
        let mut config = BridgeConfig::default();
        config.engine.cache_path = "/tmp/cef_cache".into();
        let settings = EngineSettings::from_config(&config);
        assert_eq!(settings.cache_path, PathBuf::from("/tmp/cef_cache"));
    }

    #[test]
    fn command_line_includes_switches_and_sandbox_flag() {
        let settings = EngineSettings::from_config(&BridgeConfig::default());
        let args = settings.command_line();
        assert_eq!(args.first().map(String::as_str), Some("--disable-gpu"));
        assert!(args.contains(&"--disable-plugins".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("--no-sandbox"));
        assert_eq!(args.len(), 7);
    }

    #[test]
    fn sandbox_flag_omitted_when_disabled() {
        let mut config = BridgeConfig::default();
        config.engine.no_sandbox = false;
        config.engine.switches.clear();
        assert!(EngineSettings::from_config(&config).command_line().is_empty());
    }
}
