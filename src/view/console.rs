//! Console renderer.
//!
//! Renders scan state to stdout: a summary line, a fixed-width
//! opportunity table with band tags, transient error lines, and the
//! auto-scan indicator label. Stateless apart from what it prints.

use crate::types::{Exchange, ProfitBand};

use super::{OpportunityRow, ScanSummary, ScanView, NO_OPPORTUNITIES_PLACEHOLDER};

/// Indicator label while auto-scan is off.
pub const AUTO_SCAN_IDLE_LABEL: &str = "Auto Scan (10s)";
/// Indicator label while auto-scan is on.
pub const AUTO_SCAN_ACTIVE_LABEL: &str = "Stop Auto Scan";

/// Stdout implementation of [`ScanView`].
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    fn band_tag(band: ProfitBand) -> &'static str {
        match band {
            ProfitBand::High => "[HIGH]",
            ProfitBand::Medium => "[MED ]",
            ProfitBand::Low => "[LOW ]",
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanView for ConsoleView {
    fn set_loading(&self, loading: bool) {
        if loading {
            println!("Scanning...");
        }
    }

    fn set_exchanges(&self, exchanges: &[Exchange]) {
        println!("Available exchanges:");
        for exchange in exchanges {
            println!("  {exchange}");
        }
    }

    fn set_scan_enabled(&self, enabled: bool) {
        if enabled {
            println!("Scan triggers enabled. Type `help` for commands.");
        } else {
            println!("Scan triggers disabled.");
        }
    }

    fn set_auto_scan_indicator(&self, active: bool) {
        let label = if active {
            AUTO_SCAN_ACTIVE_LABEL
        } else {
            AUTO_SCAN_IDLE_LABEL
        };
        println!("[auto] {label}");
    }

    fn show_error(&self, message: &str) {
        println!("!! {message}");
    }

    fn hide_error(&self) {
        // Nothing to erase on an append-only console.
    }

    fn set_summary(&self, summary: &ScanSummary) {
        println!(
            "-- {} pairs | {} opportunities | {}ms | {}",
            summary.total_pairs,
            summary.opportunity_count,
            summary.scan_time_ms,
            summary.scanned_at.format("%H:%M:%S"),
        );
    }

    fn render_placeholder(&self) {
        println!("{NO_OPPORTUNITIES_PLACEHOLDER}");
    }

    fn render_table(&self, rows: &[OpportunityRow]) {
        println!(
            "{:<6} {:<28} {:>5} {:>16} {:>10} {:>16}",
            "", "Path", "Pairs", "Gross Profit", "Fees", "Net Profit"
        );
        for row in rows {
            println!(
                "{:<6} {:<28} {:>5} {:>9} {} {:>10} {:>9} {}",
                Self::band_tag(row.row_band),
                row.path,
                row.pairs,
                row.gross_profit,
                Self::band_tag(row.gross_band),
                row.estimated_fees,
                row.net_profit,
                Self::band_tag(row.net_band),
            );
        }
    }
}
