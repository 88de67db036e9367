#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use marquee_core::{FetchError, RemoteMetadataClient, ResourceKey};
use marquee_model::{MovieId, RawCreditsRecord, RawMovieRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client call held open until the test answers it.
#[derive(Debug)]
pub struct PendingCall {
    pub key: ResourceKey,
    reply: oneshot::Sender<Result<Value, FetchError>>,
}

impl PendingCall {
    pub fn respond(self, body: Value) {
        let _ = self.reply.send(Ok(body));
    }

    pub fn fail(self, error: FetchError) {
        let _ = self.reply.send(Err(error));
    }
}

/// Remote client whose calls block until the test releases them, so tests
/// decide the order in which fetches complete.
#[derive(Debug, Clone)]
pub struct GatedClient {
    calls: mpsc::UnboundedSender<PendingCall>,
    count: Arc<AtomicUsize>,
}

impl GatedClient {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Self {
            calls: tx,
            count: Arc::new(AtomicUsize::new(0)),
        };
        (client, rx)
    }

    /// Calls made so far, answered or not.
    pub fn calls(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    async fn call<T: DeserializeOwned>(&self, key: ResourceKey) -> Result<T, FetchError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        let (reply, answer) = oneshot::channel();
        self.calls
            .send(PendingCall { key, reply })
            .map_err(|_| FetchError::NetworkFailure("test harness gone".into()))?;

        let body = answer
            .await
            .map_err(|_| FetchError::NetworkFailure("call abandoned".into()))??;
        serde_json::from_value(body).map_err(|err| FetchError::MappingFailure(err.to_string()))
    }
}

#[async_trait]
impl RemoteMetadataClient for GatedClient {
    async fn fetch_detail(&self, id: MovieId) -> Result<RawMovieRecord, FetchError> {
        self.call(ResourceKey::movie_detail(id)).await
    }

    async fn fetch_credits(&self, id: MovieId) -> Result<RawCreditsRecord, FetchError> {
        self.call(ResourceKey::movie_credits(id)).await
    }
}
