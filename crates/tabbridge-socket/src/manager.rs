use std::sync::Mutex;
use std::thread::JoinHandle;

use tabbridge_common::ConnectionError;
use tokio::sync::mpsc;

use crate::state::{ConnectionState, SharedState};
use crate::worker::{self, WorkerCommand};

const IO_THREAD_NAME: &str = "tabbridge-ws-io";

struct WorkerHandle {
    shutdown_tx: mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

/// Owns the outbound WebSocket connection and the thread that drives it.
///
/// All methods take `&self` and never block, except [`stop`](Self::stop),
/// which joins the I/O thread.
pub struct ConnectionManager {
    state: SharedState,
    command_tx: mpsc::UnboundedSender<WorkerCommand>,
    worker: Mutex<Option<WorkerHandle>>,
}

impl ConnectionManager {
    /// Spawn the I/O thread with its own single-threaded tokio runtime.
    pub fn start() -> Result<Self, ConnectionError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let worker_state = state.clone();
        let thread = std::thread::Builder::new()
            .name(IO_THREAD_NAME.into())
            .spawn(move || {
                runtime.block_on(worker::run(worker_state, command_rx, shutdown_rx));
            })?;

        tracing::debug!(thread = IO_THREAD_NAME, "socket worker started");

        Ok(Self {
            state,
            command_tx,
            worker: Mutex::new(Some(WorkerHandle {
                shutdown_tx,
                thread,
            })),
        })
    }

    /// Begin connecting to `endpoint`. Returns immediately.
    ///
    /// Ignored unless the connection is Disconnected. The outcome is only
    /// visible through [`state`](Self::state) and the logs.
    pub fn connect(&self, endpoint: &str) {
        if !self
            .state
            .transition(ConnectionState::Disconnected, ConnectionState::Connecting)
        {
            tracing::debug!(
                endpoint = %endpoint,
                state = %self.state.get(),
                "connect ignored"
            );
            return;
        }

        if self
            .command_tx
            .send(WorkerCommand::Connect(endpoint.to_string()))
            .is_err()
        {
            self.state.set(ConnectionState::Disconnected);
            tracing::warn!(error = %ConnectionError::WorkerUnavailable, "connect dropped");
        }
    }

    /// Queue a text frame. A silent no-op unless Connected.
    pub fn send(&self, message: String) {
        if self.state.get() != ConnectionState::Connected {
            tracing::trace!(state = %self.state.get(), "not connected, dropping message");
            return;
        }
        if self.command_tx.send(WorkerCommand::Send(message)).is_err() {
            tracing::debug!(error = %ConnectionError::WorkerUnavailable, "message dropped");
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Signal the worker, wait for it to close the socket and exit, then mark
    /// the connection Closed. Safe to call more than once.
    pub fn stop(&self) {
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        if let Some(WorkerHandle {
            shutdown_tx,
            thread,
        }) = handle
        {
            let _ = shutdown_tx.try_send(());
            if thread.join().is_err() {
                tracing::warn!("socket worker panicked");
            }
            tracing::info!("connection closed");
        }

        self.state.close();
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        self.stop();
    }
}
