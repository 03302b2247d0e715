//! HTTP client for the arbitrage scan service.
//!
//! API surface (all JSON):
//! - `GET  /api/exchanges` → array of `Exchange`
//! - `POST /api/scan` with `{"exchange_id": u32, "min_profit": f64}`
//!   → `ScanResult` on 200, `{"error": string}` (field optional) otherwise
//! - `GET  /health` → liveness probe

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ScanError, ScanService, GENERIC_SCAN_FAILURE};
use crate::types::{Exchange, ScanRequest, ScanResult};

/// Non-2xx scan responses carry an optional error message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Reqwest-backed [`ScanService`] implementation.
pub struct HttpScanService {
    http: Client,
    base_url: String,
}

impl HttpScanService {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self, ScanError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("ARBSCAN/0.1.0 (arbitrage-scan-console)")
            .build()
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ScanService for HttpScanService {
    async fn fetch_exchanges(&self) -> Result<Vec<Exchange>, ScanError> {
        let url = self.url("/api/exchanges");
        debug!(url = %url, "Fetching exchange catalog");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ScanError::Server {
                status,
                message: if body.is_empty() {
                    format!("Exchange catalog request failed ({status})")
                } else {
                    body
                },
            });
        }

        resp.json::<Vec<Exchange>>()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))
    }

    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, ScanError> {
        let url = self.url("/api/scan");
        debug!(
            url = %url,
            exchange_id = request.exchange_id,
            min_profit = request.min_profit,
            "Issuing scan request"
        );

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // The error field is optional; an unparsable body falls back
            // to the generic message rather than a transport error.
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_SCAN_FAILURE.to_string());
            return Err(ScanError::Server {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<ScanResult>()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))
    }

    async fn health(&self) -> Result<(), ScanError> {
        let resp = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ScanError::Server {
                status: resp.status().as_u16(),
                message: "Health check failed".to_string(),
            })
        }
    }
}
