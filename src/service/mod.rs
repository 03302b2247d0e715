//! Scan service integration.
//!
//! Defines the `ScanService` trait — the controller's only gateway to
//! the remote arbitrage scanner — and the error taxonomy shared by
//! every scan cycle. The HTTP implementation lives in `http`.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Exchange, ScanRequest, ScanResult};

/// Errors a scan cycle can end with.
///
/// All three variants are terminal for the current cycle — nothing is
/// retried automatically — and all surface to the operator as a
/// transient message. None is fatal to the process.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Local input problem; never reaches the network layer.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response. `message` is the server-supplied `error`
    /// field when present, else the generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Connection failure or response-body parse failure.
    #[error("Network error: {0}")]
    Transport(String),
}

/// Fallback message for non-2xx responses without an `error` field.
pub const GENERIC_SCAN_FAILURE: &str = "Scan failed";

/// Abstraction over the remote arbitrage scan service.
///
/// Implementors provide the exchange catalog, the scan call, and a
/// liveness probe. Tests swap in deterministic in-memory mocks.
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Fetch the full exchange catalog (enabled and disabled).
    async fn fetch_exchanges(&self) -> Result<Vec<Exchange>, ScanError>;

    /// Run one arbitrage scan against the selected exchange.
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, ScanError>;

    /// Probe service liveness. Used once at startup, non-fatal.
    async fn health(&self) -> Result<(), ScanError>;
}
