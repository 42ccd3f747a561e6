use axum::{
    Json, Router,
    extract::{
        State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::{Html, IntoResponse},
    routing::{get, post},
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use qgen::{Emission, Orchestrator, Outcome};

/// State shared across HTTP handlers and WebSocket tasks.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WsRequest {
    Generate { data: String },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WsResponse<'a> {
    Question {
        model: &'a str,
        text: &'a str,
    },
    Stalled {
        model: &'a str,
        payload: &'a serde_json::Value,
    },
    Error {
        model: &'a str,
        message: &'a str,
    },
    Done,
}

impl<'a> WsResponse<'a> {
    fn from_emission(emission: &'a Emission) -> Self {
        match &emission.outcome {
            Outcome::Question { text } => WsResponse::Question {
                model: &emission.label,
                text,
            },
            Outcome::Unready { payload } => WsResponse::Stalled {
                model: &emission.label,
                payload,
            },
            Outcome::Failed { message } => WsResponse::Error {
                model: &emission.label,
                message,
            },
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("page.html"))
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    info!("websocket upgrade initiated");
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    info!("websocket connected");
    while let Some(Ok(msg)) = socket.recv().await {
        if let WsMessage::Text(text) = msg {
            let Ok(WsRequest::Generate { data }) = serde_json::from_str(&text) else {
                continue;
            };
            debug!(chars = data.len(), "passage received");
            let mut emissions = state.orchestrator.generate_questions(&data);
            while let Some(emission) = emissions.next().await {
                let payload =
                    serde_json::to_string(&WsResponse::from_emission(&emission)).unwrap();
                if socket.send(WsMessage::Text(payload.into())).await.is_err() {
                    return;
                }
            }
            let done = serde_json::to_string(&WsResponse::Done).unwrap();
            if socket.send(WsMessage::Text(done.into())).await.is_err() {
                return;
            }
        }
    }
    info!("websocket disconnected");
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

/// Run one full cycle and return the collected results.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<Vec<Emission>> {
    let emissions = state
        .orchestrator
        .generate_questions(&req.text)
        .collect::<Vec<_>>()
        .await;
    Json(emissions)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .route("/generate", post(generate))
        .with_state(state)
}
