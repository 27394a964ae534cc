//! Server-Sent Events sessions.
//!
//! `GET /sse` opens a session and immediately emits an `endpoint` event
//! naming the URL to post frames to. Each posted frame is acknowledged with
//! `202 Accepted` and its response is delivered later as a `message` event
//! on the stream. Frames of one session are handled strictly in arrival
//! order by a dedicated worker; sessions share nothing but the registry.

use axum::{
    Json,
    extract::{Query, State},
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use bytes::Bytes;
use futures::{Stream, StreamExt, stream};
use http::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::http::{AppState, parse_frame};
use crate::core::McpServer;
use crate::core::protocol::JsonRpcRequest;

const INBOX_CAPACITY: usize = 32;
const OUTBOX_CAPACITY: usize = 32;

/// Open sessions keyed by session id.
pub type SessionTable = Arc<RwLock<HashMap<String, mpsc::Sender<JsonRpcRequest>>>>;

/// Query string of a posted frame.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Open a streaming session.
pub async fn open_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = Uuid::new_v4().to_string();
    let (inbox_tx, inbox_rx) = mpsc::channel(INBOX_CAPACITY);
    let (outbox_tx, outbox_rx) = mpsc::channel(OUTBOX_CAPACITY);

    state
        .sessions
        .write()
        .await
        .insert(session_id.clone(), inbox_tx);

    info!(session_id = %session_id, "SSE session opened");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("{}?sessionId={}", state.message_path, session_id));

    tokio::spawn(run_session(
        state.server.clone(),
        state.sessions.clone(),
        session_id,
        inbox_rx,
        outbox_tx,
    ));

    let events = stream::once(async move { endpoint })
        .chain(ReceiverStream::new(outbox_rx))
        .map(Ok);

    Sse::new(events).keep_alive(KeepAlive::new().interval(state.keep_alive))
}

/// Deliver a frame into an open session.
pub async fn post_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    body: Bytes,
) -> Response {
    let Some(session_id) = query.session_id else {
        return (StatusCode::BAD_REQUEST, "Missing sessionId").into_response();
    };

    let inbox = state.sessions.read().await.get(&session_id).cloned();
    let Some(inbox) = inbox else {
        debug!(session_id = %session_id, "Frame for unknown session");
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    };

    let request = match parse_frame(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::BAD_REQUEST, Json(response)).into_response(),
    };

    if inbox.send(request).await.is_err() {
        warn!(session_id = %session_id, "Session closed before frame was queued");
        state.sessions.write().await.remove(&session_id);
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    }

    (StatusCode::ACCEPTED, "Accepted").into_response()
}

/// Handle one session's frames in order until either side goes away.
async fn run_session(
    server: McpServer,
    sessions: SessionTable,
    session_id: String,
    mut inbox: mpsc::Receiver<JsonRpcRequest>,
    outbox: mpsc::Sender<Event>,
) {
    loop {
        let request = tokio::select! {
            _ = outbox.closed() => break,
            next = inbox.recv() => match next {
                Some(request) => request,
                None => break,
            },
        };

        let Some(response) = server.handle_request(request, Some(&session_id)).await else {
            continue;
        };

        let data = match serde_json::to_string(&response) {
            Ok(data) => data,
            Err(e) => {
                error!(session_id = %session_id, "Failed to serialize response: {}", e);
                continue;
            }
        };

        if outbox.send(Event::default().event("message").data(data)).await.is_err() {
            break;
        }
    }

    sessions.write().await.remove(&session_id);
    info!(session_id = %session_id, "SSE session closed");
}
