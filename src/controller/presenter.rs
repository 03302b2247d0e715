//! Result presentation.
//!
//! Transforms a scan response into a classified report and pushes it
//! through the view port. Side effects only, no retained state.
//! Input ordering is preserved verbatim.

use std::sync::Arc;

use crate::types::{Opportunity, ProfitBand, ScanResult};
use crate::view::{OpportunityRow, ScanSummary, ScanView};

pub struct ResultPresenter {
    view: Arc<dyn ScanView>,
}

impl ResultPresenter {
    pub fn new(view: Arc<dyn ScanView>) -> Self {
        Self { view }
    }

    /// Render a scan result: summary fields, then either the fixed
    /// placeholder (no opportunities) or the banded table.
    pub fn render(&self, result: &ScanResult) {
        self.view.set_summary(&ScanSummary {
            total_pairs: result.total_pairs,
            opportunity_count: result.opportunities.len(),
            scan_time_ms: result.scan_time_ms,
            scanned_at: chrono::Local::now(),
        });

        if result.opportunities.is_empty() {
            self.view.render_placeholder();
            return;
        }

        let rows: Vec<OpportunityRow> =
            result.opportunities.iter().map(Self::build_row).collect();
        self.view.render_table(&rows);
    }

    /// Format one opportunity. The row band comes from net profit;
    /// gross and net cells are banded from their own values.
    fn build_row(opportunity: &Opportunity) -> OpportunityRow {
        OpportunityRow {
            path: opportunity.path.clone(),
            pairs: opportunity.pairs,
            gross_profit: format_pct(opportunity.gross_profit_percentage),
            gross_band: ProfitBand::classify(opportunity.gross_profit_percentage),
            estimated_fees: format_pct(opportunity.estimated_fees),
            net_profit: format_pct(opportunity.net_profit_percentage),
            net_band: ProfitBand::classify(opportunity.net_profit_percentage),
            row_band: ProfitBand::classify(opportunity.net_profit_percentage),
        }
    }
}

/// Four fractional digits plus a percent sign, e.g. `2.5000%`.
fn format_pct(value: f64) -> String {
    format!("{value:.4}%")
}
