//! Network seam between the resolver and the outside world.
//!
//! The resolver only ever needs two things from the network: the body of a
//! metadata response and a yes/no probe of a direct resource URL. Both sit
//! behind the [`Transport`] trait so tests can script responses without a
//! server.

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

use crate::{common::HttpClient, config::ResolverConfig};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err)
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the full response body for a metadata request.
    async fn fetch(&self, url: &Url) -> Result<String, TransportError>;

    /// Checks whether a direct resource URL answers with HTTP 200.
    async fn probe(&self, url: &Url) -> Result<(), TransportError>;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ResolverConfig) -> Result<Self, TransportError> {
        let client = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<String, TransportError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        if !resp.status().is_success() {
            return Err(TransportError::Status(resp.status().as_u16()));
        }

        resp.text().await.map_err(TransportError::from_reqwest)
    }

    async fn probe(&self, url: &Url) -> Result<(), TransportError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        // Stricter than fetch: only a plain 200 counts.
        if resp.status().as_u16() != 200 {
            return Err(TransportError::Status(resp.status().as_u16()));
        }

        Ok(())
    }
}
