//! Rendering ports.
//!
//! The controller never touches a concrete output device; it drives
//! the [`ScanView`] trait. The binary wires in the console renderer,
//! tests wire in mocks. This keeps the orchestration state machine
//! independently testable.

pub mod console;

use crate::types::{Exchange, ProfitBand};

#[cfg(test)]
use mockall::automock;

/// Summary fields written after every successful scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub total_pairs: usize,
    pub opportunity_count: usize,
    pub scan_time_ms: u64,
    /// Local completion time, for the console status line.
    pub scanned_at: chrono::DateTime<chrono::Local>,
}

/// One fully formatted opportunity row.
///
/// Percentage strings carry four fractional digits and a trailing `%`.
/// `row_band` is derived from net profit; the gross and net cells are
/// banded independently from their own values.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRow {
    pub path: String,
    pub pairs: u32,
    pub gross_profit: String,
    pub gross_band: ProfitBand,
    pub estimated_fees: String,
    pub net_profit: String,
    pub net_band: ProfitBand,
    pub row_band: ProfitBand,
}

/// Message shown when a scan finds nothing above the threshold.
pub const NO_OPPORTUNITIES_PLACEHOLDER: &str =
    "No arbitrage opportunities found above the minimum profit threshold.";

/// The view port the controller renders through.
///
/// Implementations must be cheap and non-blocking; they are called
/// from the middle of scan cycles.
#[cfg_attr(test, automock)]
pub trait ScanView: Send + Sync {
    /// Show or clear the in-progress indicator.
    fn set_loading(&self, loading: bool);

    /// Publish the selectable (enabled-only) exchange set.
    fn set_exchanges(&self, exchanges: &[Exchange]);

    /// Enable or disable the scan triggers.
    fn set_scan_enabled(&self, enabled: bool);

    /// Flip the auto-scan indicator between active and idle styling.
    fn set_auto_scan_indicator(&self, active: bool);

    /// Display a failure message.
    fn show_error(&self, message: &str);

    /// Dismiss any visible failure message.
    fn hide_error(&self);

    /// Write the post-scan summary fields.
    fn set_summary(&self, summary: &ScanSummary);

    /// Render the fixed no-results placeholder.
    fn render_placeholder(&self);

    /// Render the opportunity table, one row per entry, input order.
    fn render_table(&self, rows: &[OpportunityRow]);
}
