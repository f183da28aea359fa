//! Streaming metrics client: one WebSocket connection with backoff reconnect.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::types::{Envelope, MetricSnapshot};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connection lifecycle as shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

/// Events the stream task feeds into the app loop.
#[derive(Debug)]
pub enum StreamEvent {
    State(ConnectionState),
    Snapshot(MetricSnapshot),
}

pub const BASE_RECONNECT_MS: u64 = 3_000;
pub const MAX_RECONNECT_MS: u64 = 30_000;

/// Backoff delay for the given closure count: min(30s, 3s * 2^attempts).
pub fn reconnect_delay(attempts: u32) -> std::time::Duration {
    let ms = BASE_RECONNECT_MS
        .saturating_mul(2u64.saturating_pow(attempts))
        .min(MAX_RECONNECT_MS);
    std::time::Duration::from_millis(ms)
}

/// Closure counter for the backoff schedule. Reset on every successful open.
#[derive(Debug, Default)]
pub struct ReconnectState {
    attempts: u32,
}

impl ReconnectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn on_open(&mut self) {
        self.attempts = 0;
    }

    /// Record a closure and return how long to wait before the next attempt.
    pub fn on_close(&mut self) -> std::time::Duration {
        let delay = reconnect_delay(self.attempts);
        self.attempts += 1;
        delay
    }
}

/// Derive the streaming endpoint from the HTTP base URL.
pub fn ws_url(base: &Url) -> Url {
    let mut url = base.clone();
    let scheme = if base.scheme() == "https" { "wss" } else { "ws" };
    // set_scheme only rejects invalid transitions; ws/wss from http/https is fine
    let _ = url.set_scheme(scheme);
    url.set_path("/ws");
    url.set_query(None);
    url
}

/// Spawn the stream task. It runs until the receiving side of `tx` is
/// dropped, reconnecting forever with capped exponential backoff.
pub fn spawn_stream(url: Url, tx: mpsc::UnboundedSender<StreamEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(run_stream(url, tx))
}

async fn run_stream(url: Url, tx: mpsc::UnboundedSender<StreamEvent>) {
    let mut reconnect = ReconnectState::new();
    loop {
        if tx.send(StreamEvent::State(ConnectionState::Connecting)).is_err() {
            return;
        }
        match connect_async(url.as_str()).await {
            Ok((ws, _)) => {
                if tx.send(StreamEvent::State(ConnectionState::Connected)).is_err() {
                    return;
                }
                reconnect.on_open();
                tracing::info!(%url, "stream connected");
                if pump(ws, &tx).await.is_err() {
                    // app side went away
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "stream connect failed");
            }
        }
        if tx.send(StreamEvent::State(ConnectionState::Disconnected)).is_err() {
            return;
        }
        let delay = reconnect.on_close();
        tracing::info!(attempts = reconnect.attempts(), ?delay, "reconnecting after delay");
        tokio::time::sleep(delay).await;
    }
}

/// Read frames until the connection closes. Err means the app channel closed
/// and the task should stop entirely.
async fn pump(mut ws: WsStream, tx: &mpsc::UnboundedSender<StreamEvent>) -> Result<(), ()> {
    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                // Bare "ping" is the server's heartbeat probe
                if text == "ping" {
                    let _ = ws.send(Message::Text("pong".into())).await;
                } else if text != "pong" {
                    if let Some(snapshot) = decode_snapshot(&text) {
                        if tx.send(StreamEvent::Snapshot(snapshot)).is_err() {
                            return Err(());
                        }
                    }
                }
            }
            Ok(Message::Ping(payload)) => {
                let _ = ws.send(Message::Pong(payload)).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "stream read error");
                break;
            }
        }
    }
    Ok(())
}

/// Decode a metrics envelope. Unknown types and malformed payloads are
/// dropped with a warning; they never take the connection down.
pub fn decode_snapshot(text: &str) -> Option<MetricSnapshot> {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(error = %e, "dropping malformed stream payload");
            return None;
        }
    };
    if envelope.kind != "metrics" {
        return None;
    }
    match serde_json::from_value(envelope.data) {
        Ok(m) => Some(m),
        Err(e) => {
            tracing::warn!(error = %e, "dropping metrics payload with bad shape");
            None
        }
    }
}
