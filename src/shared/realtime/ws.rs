use actix_web::{get, web, Error, HttpRequest, HttpResponse};
use actix_ws::Message;
use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::TokenProvider;

use super::{BroadcastEventBus, ForumEvent};

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// Optional bearer token; anonymous sessions only receive global events.
    token: Option<String>,
}

#[get("/api/ws")]
pub async fn ws_handler(
    req: HttpRequest,
    stream: web::Payload,
    bus: web::Data<Arc<BroadcastEventBus>>,
    token_provider: web::Data<Arc<dyn TokenProvider>>,
    query: web::Query<WsQuery>,
) -> Result<HttpResponse, Error> {
    // Invalid tokens downgrade to an anonymous session rather than
    // rejecting the upgrade; the socket is a hint channel, not an API.
    let user_id = query
        .token
        .as_deref()
        .and_then(|token| token_provider.verify_token(token).ok())
        .map(|claims| claims.sub);

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    let rx = bus.subscribe();
    actix_web::rt::spawn(run_session(session, msg_stream, rx, user_id));

    Ok(response)
}

fn event_frame(event: &ForumEvent) -> String {
    json!({ "event": event.name, "data": event.payload }).to_string()
}

fn is_for_session(event: &ForumEvent, user_id: Option<Uuid>) -> bool {
    match event.room {
        None => true,
        Some(recipient) => user_id == Some(recipient),
    }
}

async fn run_session(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut rx: tokio::sync::broadcast::Receiver<ForumEvent>,
    user_id: Option<Uuid>,
) {
    tracing::debug!(?user_id, "websocket session opened");

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Ok(event) => {
                        if !is_for_session(&event, user_id) {
                            continue;
                        }
                        if session.text(event_frame(&event)).await.is_err() {
                            break;
                        }
                    }
                    // Slow consumer: skip the lost window and keep going
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "websocket session lagged, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            msg = msg_stream.next() => {
                match msg {
                    Some(Ok(Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {} // inbound frames are ignored; this channel is outbound-only
                    Some(Err(_)) => break,
                }
            }
        }
    }

    let _ = session.close(None).await;
    tracing::debug!(?user_id, "websocket session closed");
}
