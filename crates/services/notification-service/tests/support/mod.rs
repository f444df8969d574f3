//! In-process stand-ins for the two email backends.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use domain::EmailMessage;

/// How a fake backend answers send requests
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Accept,
    /// Accept without returning an id
    AcceptWithoutId,
    Reject(&'static str),
    /// Reject without a reason
    RejectSilently,
    /// 200 with a body that is not JSON
    Garbage,
    /// Accept after a delay
    Slow(Duration),
}

pub struct FakeBackend {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeBackend {
    /// Messages the backend accepted, in the port's field names.
    pub fn received(&self) -> Vec<EmailMessage> {
        self.state.received.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.state.received.lock().unwrap().clear();
    }
}

struct FakeState {
    behaviour: Behaviour,
    received: Mutex<Vec<EmailMessage>>,
    hits: AtomicUsize,
}

impl FakeState {
    /// Count the request; returns the 1-based request number.
    fn hit(&self) -> usize {
        self.hits.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn record(&self, message: EmailMessage) {
        self.received.lock().unwrap().push(message);
    }
}

#[derive(Deserialize)]
struct ReliableRequest {
    recipient: String,
    title: String,
    content: String,
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn new_state(behaviour: Behaviour) -> Arc<FakeState> {
    Arc::new(FakeState {
        behaviour,
        received: Mutex::new(Vec::new()),
        hits: AtomicUsize::new(0),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Backend speaking `POST /send`.
pub async fn standard_backend(behaviour: Behaviour) -> FakeBackend {
    async fn send(State(state): State<Arc<FakeState>>, Json(message): Json<EmailMessage>) -> Response {
        let n = state.hit();
        match state.behaviour {
            Behaviour::Accept | Behaviour::Slow(_) => {
                if let Behaviour::Slow(delay) = state.behaviour {
                    tokio::time::sleep(delay).await;
                }
                state.record(message);
                Json(json!({ "success": true, "messageId": format!("std-{}", n) })).into_response()
            }
            Behaviour::AcceptWithoutId => {
                state.record(message);
                Json(json!({ "success": true })).into_response()
            }
            Behaviour::Reject(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": reason })),
            )
                .into_response(),
            Behaviour::RejectSilently => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
                .into_response(),
            Behaviour::Garbage => (StatusCode::OK, "<html>oops</html>").into_response(),
        }
    }

    let state = new_state(behaviour);
    let router = Router::new()
        .route("/send", post(send))
        .route("/health", get(health))
        .with_state(Arc::clone(&state));

    FakeBackend {
        base_url: spawn(router).await,
        state,
    }
}

/// Backend speaking `POST /sendMessage`.
pub async fn reliable_backend(behaviour: Behaviour) -> FakeBackend {
    async fn send_message(
        State(state): State<Arc<FakeState>>,
        Json(request): Json<ReliableRequest>,
    ) -> Response {
        let n = state.hit();
        let message = EmailMessage::new(request.recipient, request.title, request.content);
        match state.behaviour {
            Behaviour::Accept | Behaviour::Slow(_) => {
                if let Behaviour::Slow(delay) = state.behaviour {
                    tokio::time::sleep(delay).await;
                }
                state.record(message);
                Json(json!({ "sent": true, "id": format!("rel-{}", n) })).into_response()
            }
            Behaviour::AcceptWithoutId => {
                state.record(message);
                Json(json!({ "sent": true })).into_response()
            }
            Behaviour::Reject(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "sent": false, "message": reason })),
            )
                .into_response(),
            Behaviour::RejectSilently => {
                (StatusCode::BAD_REQUEST, Json(json!({ "sent": false }))).into_response()
            }
            Behaviour::Garbage => (StatusCode::OK, "not json").into_response(),
        }
    }

    let state = new_state(behaviour);
    let router = Router::new()
        .route("/sendMessage", post(send_message))
        .route("/health", get(health))
        .with_state(Arc::clone(&state));

    FakeBackend {
        base_url: spawn(router).await,
        state,
    }
}

/// A base URL nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
