//! Shared types for the ARBSCAN controller.
//!
//! These types form the data model exchanged with the remote scan
//! service and consumed by the controller and view modules. Wire names
//! are snake_case JSON, matching the service's API exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Exchange
// ---------------------------------------------------------------------------

/// A tradable exchange as reported by `GET /api/exchanges`.
///
/// Immutable once loaded; only `enabled` exchanges are offered for
/// selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exchange {
    pub id: u32,
    pub name: String,
    pub enabled: bool,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)
    }
}

// ---------------------------------------------------------------------------
// Scan request / result
// ---------------------------------------------------------------------------

/// Body of `POST /api/scan`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRequest {
    pub exchange_id: u32,
    pub min_profit: f64,
}

/// Fallback minimum profit (percent) when the operator input is empty
/// or unparsable.
pub const DEFAULT_MIN_PROFIT: f64 = 0.1;

impl ScanRequest {
    /// Build a request from raw operator input.
    ///
    /// The min-profit text is parsed leniently: blank or non-numeric
    /// input falls back to [`DEFAULT_MIN_PROFIT`].
    pub fn from_inputs(exchange_id: u32, min_profit_input: &str) -> Self {
        let min_profit = min_profit_input
            .trim()
            .parse::<f64>()
            .unwrap_or(DEFAULT_MIN_PROFIT);
        Self {
            exchange_id,
            min_profit,
        }
    }
}

/// Successful response of `POST /api/scan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub total_pairs: usize,
    pub opportunities: Vec<Opportunity>,
    pub scan_time_ms: u64,
}

/// A single price-cycle opportunity within a scan result.
///
/// Ordering within [`ScanResult::opportunities`] is inherited from the
/// service response and preserved verbatim downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Conversion cycle, e.g. "BTC→ETH→USDT→BTC".
    pub path: String,
    /// Number of pairs traversed by the cycle.
    pub pairs: u32,
    /// Theoretical return ignoring trading fees.
    pub gross_profit_percentage: f64,
    /// Estimated total fees over the cycle.
    pub estimated_fees: f64,
    /// Return after estimated fees; basis for row classification.
    pub net_profit_percentage: f64,
}

impl Opportunity {
    /// Helper to build a test opportunity with sensible defaults.
    #[cfg(test)]
    pub fn sample() -> Self {
        Opportunity {
            path: "BTC→ETH→USDT→BTC".to_string(),
            pairs: 3,
            gross_profit_percentage: 2.5,
            estimated_fees: 0.3,
            net_profit_percentage: 2.2,
        }
    }
}

// ---------------------------------------------------------------------------
// Profit classification
// ---------------------------------------------------------------------------

/// Visual band for a profit figure.
///
/// Rows are banded by net profit; gross and net cells are banded
/// independently from their own values, so a row's band and a cell's
/// band can legitimately disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfitBand {
    High,
    Medium,
    Low,
}

impl ProfitBand {
    /// Classify a profit percentage into its band.
    ///
    /// Lower bounds are inclusive: `>= 2.0` is High, `>= 1.0` Medium,
    /// everything below is Low.
    pub fn classify(profit_pct: f64) -> Self {
        if profit_pct >= 2.0 {
            ProfitBand::High
        } else if profit_pct >= 1.0 {
            ProfitBand::Medium
        } else {
            ProfitBand::Low
        }
    }

    /// CSS-style label used by renderers.
    pub fn label(&self) -> &'static str {
        match self {
            ProfitBand::High => "high",
            ProfitBand::Medium => "medium",
            ProfitBand::Low => "low",
        }
    }
}

impl fmt::Display for ProfitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
