use crate::models::Location;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Per-request deadline for upstream calls
pub(crate) const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when resolving a CEP
///
/// The handler treats every variant as an internal failure; the split
/// only matters for server-side logging.
#[derive(Debug, Error)]
pub enum ViaCepError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ViaCEP returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Capability to resolve a validated CEP into a location
///
/// `Ok(None)` means the CEP is well-formed but unknown to the upstream
/// registry, which is distinct from a lookup failure.
#[async_trait]
pub trait CepLookup: Send + Sync {
    async fn lookup(&self, cep: &str) -> Result<Option<Location>, ViaCepError>;
}

/// ViaCEP API client
pub struct ViaCepClient {
    base_url: String,
    client: Client,
}

/// Wire format of a ViaCEP response
///
/// A missing CEP still comes back as HTTP 200, flagged by `erro: true`
/// with every other field absent, so all fields need defaults.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepClient {
    /// Create a client against the given ViaCEP endpoint
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }
}

#[async_trait]
impl CepLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Option<Location>, ViaCepError> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep);

        tracing::debug!("Resolving CEP {} via {}", cep, url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ViaCepError::Status(response.status()));
        }

        let payload: ViaCepPayload = response.json().await?;

        if payload.erro {
            tracing::debug!("CEP {} not found upstream", cep);
            return Ok(None);
        }

        Ok(Some(Location {
            city: payload.localidade,
            state: payload.uf,
        }))
    }
}
