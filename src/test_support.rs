// src/test_support.rs

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Router,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tabular_loader=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Local HTTP server answering every path with the same canned response.
/// Lives until the runtime shuts down.
pub struct TestServer {
    base: Url,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> Url {
        self.base.join(path).expect("test path should join")
    }

    /// Requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct Canned {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
    hits: Arc<AtomicUsize>,
}

async fn canned(State(canned): State<Arc<Canned>>) -> impl IntoResponse {
    canned.hits.fetch_add(1, Ordering::SeqCst);
    (
        canned.status,
        [(header::CONTENT_TYPE, canned.content_type.clone())],
        canned.body.clone(),
    )
}

pub async fn serve(status: u16, content_type: &str, body: Vec<u8>) -> Result<TestServer> {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(Canned {
        status: StatusCode::from_u16(status)?,
        content_type: content_type.to_string(),
        body,
        hits: Arc::clone(&hits),
    });
    let app = Router::new().fallback(canned).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = Url::parse(&format!("http://{}/", listener.local_addr()?))?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestServer { base, hits })
}
