mod cli;
mod host;
mod runner;
mod script;
mod settings;

use std::fs::File;
use std::io::{self, BufReader};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tabbridge_common::BridgeError;
use tabbridge_config::schema::BridgeConfig;
use tabbridge_core::EventTranslator;
use tabbridge_socket::{ConnectionManager, ConnectionState};
use tracing_subscriber::EnvFilter;

use crate::host::ScriptedHost;
use crate::runner::Runner;
use crate::settings::EngineSettings;

const DEFAULT_LOG_DIRECTIVE: &str = "tabbridge=info";

fn main() {
    let args = cli::parse();

    // Config is read before logging so `[logging] level` can seed the filter.
    let loaded = match &args.config {
        Some(path) => tabbridge_config::load_config_from(path),
        None => tabbridge_config::load_config(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (BridgeConfig::default(), Some(e)),
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("tabbridge={}", config.logging.level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("tabbridge v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(endpoint) = args.endpoint.clone() {
        config.connection.url = endpoint;
    }
    if let Some(url) = args.url.clone() {
        config.engine.initial_url = url;
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(args: &cli::Args, config: &BridgeConfig) -> Result<(), BridgeError> {
    let manager = Arc::new(ConnectionManager::start()?);
    if config.connection.enabled {
        manager.connect(&config.connection.url);
        wait_for_connection(&manager, Duration::from_millis(args.connect_wait_ms));
    } else {
        tracing::info!("Connection disabled in config, notifications will be dropped");
    }

    let steps = match &args.script {
        Some(path) => script::parse_script(BufReader::new(File::open(path)?))?,
        None => script::parse_script(io::stdin().lock())?,
    };
    tracing::info!(steps = steps.len(), "Script loaded");

    let host = Rc::new(ScriptedHost::new(EngineSettings::from_config(config)));
    let translator = Rc::new(EventTranslator::from_config(
        Box::new(manager.clone()),
        host.clone(),
        config,
    ));
    translator.create_new_tab(&host.settings().initial_url);

    let runner = Runner::new(host, translator);
    runner.run(steps);
    drop(runner);

    manager.stop();
    Ok(())
}

/// Block until the socket leaves Connecting or `timeout` passes.
fn wait_for_connection(manager: &ConnectionManager, timeout: Duration) {
    let started = Instant::now();
    while manager.state() == ConnectionState::Connecting && started.elapsed() < timeout {
        std::thread::sleep(Duration::from_millis(10));
    }
    tracing::info!(state = %manager.state(), "Connection state after wait");
}
