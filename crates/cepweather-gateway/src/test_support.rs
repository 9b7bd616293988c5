//! In-process stub servers and mock ports for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;

use cepweather::{Cep, CepResolver, DomainError, RelayedResponse};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Resolver that answers with a canned response and records what it saw
pub struct MockResolver {
    response: Option<RelayedResponse>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            response: Some(RelayedResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails like an unreachable Resolver
    pub fn unreachable() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CepResolver for MockResolver {
    async fn resolve(&self, cep: &Cep) -> Result<RelayedResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(cep.to_string());
        self.response
            .clone()
            .ok_or_else(|| DomainError::upstream("MockResolver", "connection refused"))
    }
}
