//! The async loop running on the I/O thread.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tabbridge_common::ConnectionError;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::state::{ConnectionState, SharedState};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Upper bound on the close handshake. A peer that stopped reading never
/// drains our close frame.
const CLOSE_TIMEOUT: Duration = Duration::from_millis(500);

/// Work queued by the manager for the I/O thread.
pub(crate) enum WorkerCommand {
    Connect(String),
    Send(String),
}

/// Run until shutdown is signalled or the manager goes away.
///
/// Holds at most one socket. Any connect, read, or write failure drops the
/// socket and leaves the state Disconnected; nothing is retried.
pub(crate) async fn run(
    state: SharedState,
    mut commands: mpsc::UnboundedReceiver<WorkerCommand>,
    mut shutdown: mpsc::Receiver<()>,
) {
    let mut socket: Option<WsStream> = None;

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,

            cmd = commands.recv() => match cmd {
                Some(WorkerCommand::Connect(endpoint)) => {
                    if let Some(old) = socket.take() {
                        close_socket(old).await;
                    }
                    state.set(ConnectionState::Connecting);
                    tracing::info!(endpoint = %endpoint, "connecting");

                    tokio::select! {
                        result = connect_async(endpoint.as_str()) => {
                            socket = finish_connect(&state, &endpoint, result);
                        }
                        _ = shutdown.recv() => break,
                    }
                }
                Some(WorkerCommand::Send(text)) => {
                    let Some(ws) = socket.as_mut() else {
                        tracing::trace!("no socket, dropping outbound frame");
                        continue;
                    };
                    // A peer that stops reading stalls the write once the
                    // TCP buffers fill; shutdown must still get through.
                    tokio::select! {
                        result = ws.send(Message::Text(text.into())) => {
                            if let Err(e) = result {
                                tracing::debug!(error = %e, "send failed, dropping connection");
                                socket = None;
                                state.set(ConnectionState::Disconnected);
                            }
                        }
                        _ = shutdown.recv() => {
                            tracing::debug!("shutdown during send, abandoning frame");
                            break;
                        }
                    }
                }
                None => break,
            },

            frame = next_frame(&mut socket) => {
                if !handle_inbound(frame) {
                    socket = None;
                    state.set(ConnectionState::Disconnected);
                }
            }
        }
    }

    if let Some(ws) = socket.take() {
        close_socket(ws).await;
    }
    tracing::debug!("socket worker exiting");
}

async fn close_socket(mut ws: WsStream) {
    match tokio::time::timeout(CLOSE_TIMEOUT, ws.close(None)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::debug!(error = %e, "close handshake failed"),
        Err(_) => tracing::debug!("close handshake timed out, dropping socket"),
    }
}

fn finish_connect<R>(
    state: &SharedState,
    endpoint: &str,
    result: Result<(WsStream, R), tungstenite::Error>,
) -> Option<WsStream> {
    match result {
        Ok((ws, _)) => {
            state.set(ConnectionState::Connected);
            tracing::info!(endpoint = %endpoint, "connected");
            Some(ws)
        }
        Err(e) => {
            state.set(ConnectionState::Disconnected);
            let error = connect_error(endpoint, e);
            tracing::warn!(endpoint = %endpoint, error = %error, "connect failed");
            None
        }
    }
}

/// Classify a failed connect attempt.
pub(crate) fn connect_error(endpoint: &str, error: tungstenite::Error) -> ConnectionError {
    match error {
        tungstenite::Error::Url(e) => ConnectionError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        },
        tungstenite::Error::Io(e) => ConnectionError::Io(e),
        other => ConnectionError::Handshake(other.to_string()),
    }
}

async fn next_frame(socket: &mut Option<WsStream>) -> Option<Result<Message, tungstenite::Error>> {
    match socket.as_mut() {
        Some(ws) => ws.next().await,
        None => std::future::pending().await,
    }
}

/// Log an inbound frame. Returns false when the connection is gone.
fn handle_inbound(frame: Option<Result<Message, tungstenite::Error>>) -> bool {
    match frame {
        Some(Ok(Message::Close(reason))) => {
            tracing::info!(?reason, "peer closed connection");
            false
        }
        Some(Ok(msg)) => {
            tracing::debug!(len = msg.len(), "ignoring inbound frame");
            true
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "socket read failed");
            false
        }
        None => {
            tracing::info!("socket stream ended");
            false
        }
    }
}
