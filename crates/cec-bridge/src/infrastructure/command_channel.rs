//! Command channel: WebSocket accept loop and per-session request handling.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming TCP connections from remote clients.
//! 3. Upgrading each connection to a WebSocket session.
//! 4. Feeding each text frame through the [`Dispatcher`] and echoing the
//!    JSON response back on the same connection — one request, exactly one
//!    response.
//! 5. Shutting down when the shared `running` flag is cleared.
//!
//! Each session runs in its own Tokio task, so one slow client never blocks
//! another, and a malformed request only ever produces a failure response
//! for its own session.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use crate::application::dispatcher::Dispatcher;

/// Runs the command-channel accept loop until `running` is cleared.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (port in use,
/// missing permission). This is fatal at startup.
pub async fn run_command_channel(
    bind_addr: SocketAddr,
    dispatcher: Arc<Dispatcher>,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind command channel on {bind_addr}"))?;

    info!("command channel listening on {bind_addr}");

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping command channel");
            break;
        }

        // Bounded accept so the loop observes the shutdown flag even when no
        // client ever connects.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("new command connection from {peer_addr}");
                let dispatcher = Arc::clone(&dispatcher);
                tokio::spawn(async move {
                    handle_session(stream, peer_addr, dispatcher).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error; keep serving.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout — no new connection; loop back to check the flag.
            }
        }
    }

    Ok(())
}

/// Top-level handler for a single session; logs the outcome of
/// [`run_session`].
async fn handle_session(raw_stream: TcpStream, peer_addr: SocketAddr, dispatcher: Arc<Dispatcher>) {
    match run_session(raw_stream, peer_addr, dispatcher).await {
        Ok(()) => info!("session {peer_addr} closed normally"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of one command session.
///
/// # Errors
///
/// Returns an error if the WebSocket handshake fails or a response cannot be
/// written back.
async fn run_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    dispatcher: Arc<Dispatcher>,
) -> anyhow::Result<()> {
    let mut ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    info!("command session established: {peer_addr}");

    loop {
        let ws_msg = match ws_stream.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::Protocol(_))) => {
                debug!("session {peer_addr}: WebSocket closed normally");
                break;
            }
            Some(Err(e)) => {
                warn!("session {peer_addr}: WebSocket error: {e}");
                break;
            }
            None => {
                debug!("session {peer_addr}: stream ended");
                break;
            }
        };

        match ws_msg {
            WsMessage::Text(request) => {
                // All validation happens inside the dispatcher; even a
                // malformed request produces a response rather than a
                // session teardown.
                let response = dispatcher.handle(&request);

                let reply = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("session {peer_addr}: response serialization error: {e}");
                        continue;
                    }
                };

                ws_stream
                    .send(WsMessage::Text(reply))
                    .await
                    .with_context(|| format!("session {peer_addr}: response send failed"))?;
            }

            WsMessage::Binary(_) => {
                // The command protocol is JSON text only.
                warn!("session {peer_addr}: unexpected binary WebSocket frame (ignored)");
            }

            WsMessage::Ping(data) => {
                // tokio-tungstenite replies with Pong automatically on the
                // next write; nothing to do.
                debug!("session {peer_addr}: WebSocket ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {peer_addr}: WebSocket pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {peer_addr}: WebSocket Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {peer_addr}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
