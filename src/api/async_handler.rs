/*!
Asynchronous front for the request handlers.

Provider calls are CPU-bound, so each request is moved onto tokio's
blocking pool. Requests never share a lock while the crypto runs; the
only shared write is the metrics update at the end of each call.
*/

use std::sync::Arc;

use tokio::task;

use super::dispatch::{self, Request};
use super::handler::CryptoHandler;
use super::types::{
    DecapsulateRequest, DecapsulateResponse, EncapsulateRequest, EncapsulateResponse,
    KeyGenResponse, SignRequest, SignResponse, VerifyRequest, VerifyResponse,
};
use crate::core::error::{Error, Result};
use crate::core::metrics::OperationStat;

/// Asynchronous handler for crypto API requests
#[derive(Clone)]
pub struct AsyncCryptoHandler {
    inner: Arc<CryptoHandler>,
}

impl AsyncCryptoHandler {
    pub fn new(handler: CryptoHandler) -> Self {
        Self {
            inner: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &CryptoHandler {
        &self.inner
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&CryptoHandler) -> Result<T> + Send + 'static,
    {
        let handler = Arc::clone(&self.inner);
        task::spawn_blocking(move || f(&handler))
            .await
            .map_err(|e| Error::Internal(format!("worker task failed: {}", e)))?
    }

    pub async fn keygen(&self, algorithm: String) -> Result<KeyGenResponse> {
        self.blocking(move |h| h.keygen(&algorithm)).await
    }

    pub async fn encapsulate(&self, request: EncapsulateRequest) -> Result<EncapsulateResponse> {
        self.blocking(move |h| h.encapsulate(&request)).await
    }

    pub async fn decapsulate(&self, request: DecapsulateRequest) -> Result<DecapsulateResponse> {
        self.blocking(move |h| h.decapsulate(&request)).await
    }

    pub async fn sign(&self, algorithm: String, request: SignRequest) -> Result<SignResponse> {
        self.blocking(move |h| h.sign(&algorithm, &request)).await
    }

    pub async fn verify(&self, algorithm: String, request: VerifyRequest) -> Result<VerifyResponse> {
        self.blocking(move |h| h.verify(&algorithm, &request)).await
    }

    /// Execute a decoded JSON-lines request
    pub async fn handle(&self, request: Request) -> Result<serde_json::Value> {
        self.blocking(move |h| dispatch::handle(h, request)).await
    }

    /// Stats are a cheap read; no need for the blocking pool
    pub fn stats(&self) -> Vec<OperationStat> {
        self.inner.stats()
    }
}
