use crate::layout;
use crate::store::ResultStore;
use axum::{
    extract::{
        ws::{Message, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use pairs::{Envelope, FinishData, ServerMessage, StartData};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure, on read or write; both end the session.
    #[error("websocket: {0}")]
    Socket(#[from] axum::Error),
    /// The envelope itself did not parse; ends the session. Malformed
    /// payloads inside a valid envelope are swallowed instead.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One player's connection. `path` is the level the last `start` selected,
/// empty until then; a `finish` arriving first is recorded under the empty
/// key.
pub struct Session {
    id: Uuid,
    path: String,
    store: Arc<ResultStore>,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(store): State<Arc<ResultStore>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let session = Session::new(store);
        let id = session.id;
        match session.run(socket).await {
            Ok(()) => tracing::info!(id = %id, "connection closed"),
            Err(err) => tracing::warn!(id = %id, error = %err, "connection lost"),
        }
    })
}

impl Session {
    pub fn new(store: Arc<ResultStore>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: String::new(),
            store,
        }
    }

    pub async fn run<S>(mut self, mut socket: S) -> Result<(), Error>
    where
        S: Stream<Item = Result<Message, axum::Error>>
            + Sink<Message, Error = axum::Error>
            + Unpin,
    {
        tracing::info!(id = %self.id, "connection open");
        while let Some(message) = socket.next().await {
            let text = match message? {
                Message::Text(text) => text,
                Message::Close(_) => break,
                _ => continue,
            };
            let envelope: Envelope = serde_json::from_str(&text)?;
            tracing::debug!(id = %self.id, state = %envelope.state, "received envelope");
            if let Some(response) = self.handle(envelope) {
                tracing::debug!(id = %self.id, "sending response: {:?}", response);
                let json = serde_json::to_string(&response)?;
                socket.send(Message::Text(json.into())).await?;
            }
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, envelope), fields(id = %self.id))]
    pub fn handle(&mut self, envelope: Envelope) -> Option<ServerMessage> {
        match envelope.state.as_str() {
            "start" => {
                let data: StartData = match serde_json::from_value(envelope.data) {
                    Ok(data) => data,
                    Err(err) => {
                        tracing::warn!("bad start payload: {}", err);
                        return None;
                    }
                };
                self.path = data.path;
                let variation = layout::generate(&self.path);
                Some(ServerMessage::Set {
                    count: variation.len(),
                    variation,
                })
            }
            "finish" => {
                let data: FinishData = match serde_json::from_value(envelope.data) {
                    Ok(data) => data,
                    Err(err) => {
                        tracing::warn!("bad finish payload: {}", err);
                        return None;
                    }
                };
                let best = self.store.update_best(&self.path, data.clicks, data.time);
                Some(ServerMessage::Result {
                    message: format!(
                        "best result is {} and your result is {}",
                        best, data.clicks
                    ),
                })
            }
            other => {
                tracing::debug!(state = other, "ignoring unknown state");
                None
            }
        }
    }
}
