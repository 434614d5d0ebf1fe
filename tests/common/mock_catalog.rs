//! Catalog endpoint answering every request with one canned response.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            ..Self::json(r#"{"message": "mock failure"}"#)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    paths: Arc<Mutex<Vec<String>>>,
}

/// Serves `/api/v1/products` on an ephemeral port until dropped.
pub struct MockCatalog {
    url: String,
    paths: Arc<Mutex<Vec<String>>>,
    server: JoinHandle<()>,
}

impl MockCatalog {
    pub async fn serve(response: MockResponse) -> Self {
        let paths = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/api/v1/products", get(products))
            .with_state(MockState {
                response,
                paths: Arc::clone(&paths),
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api/v1/products", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { url, paths, server }
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub async fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().await.clone()
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn products(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.paths.lock().await.push(uri.path().to_string());
    tokio::time::sleep(state.response.delay).await;
    (
        state.response.status,
        [("content-type", "application/json")],
        state.response.body.clone(),
    )
}
