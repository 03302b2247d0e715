//! Scan orchestration state machine.
//!
//! Owns the scan trigger (manual or timer-driven): validates the
//! exchange selection, issues the scan call, and routes the outcome to
//! the presenter or the notifier. The loading indicator is set before
//! the call and cleared after the outcome is processed, on every exit
//! path. Also owns the single auto-scan timer handle; activation is
//! the only path that creates it and deactivation the only path that
//! clears it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::catalog::ExchangeCatalog;
use super::inputs::InputSource;
use super::notifier::ErrorNotifier;
use super::presenter::ResultPresenter;
use crate::service::{ScanError, ScanService};
use crate::types::ScanRequest;
use crate::view::ScanView;

/// Cadence of timer-driven scans.
pub const AUTO_SCAN_INTERVAL: Duration = Duration::from_secs(10);

/// Validation message when no (or a disabled) exchange is selected.
pub const SELECT_EXCHANGE_MESSAGE: &str = "Please select an exchange";

/// How a trigger ended. Terminal either way; the next trigger is the
/// retry mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Result rendered.
    Success,
    /// Server or transport failure reported to the operator.
    Failed,
    /// Local validation failure; no network call was made.
    Rejected,
    /// A scan was already in flight; this trigger was dropped.
    Skipped,
}

pub struct ScanOrchestrator {
    service: Arc<dyn ScanService>,
    view: Arc<dyn ScanView>,
    catalog: Arc<ExchangeCatalog>,
    presenter: ResultPresenter,
    notifier: Arc<ErrorNotifier>,
    inputs: Arc<dyn InputSource>,
    interval: Duration,
    in_flight: AtomicBool,
    auto_scan: Mutex<Option<JoinHandle<()>>>,
}

impl ScanOrchestrator {
    pub fn new(
        service: Arc<dyn ScanService>,
        view: Arc<dyn ScanView>,
        catalog: Arc<ExchangeCatalog>,
        notifier: Arc<ErrorNotifier>,
        inputs: Arc<dyn InputSource>,
    ) -> Self {
        Self::with_interval(service, view, catalog, notifier, inputs, AUTO_SCAN_INTERVAL)
    }

    pub fn with_interval(
        service: Arc<dyn ScanService>,
        view: Arc<dyn ScanView>,
        catalog: Arc<ExchangeCatalog>,
        notifier: Arc<ErrorNotifier>,
        inputs: Arc<dyn InputSource>,
        interval: Duration,
    ) -> Self {
        let presenter = ResultPresenter::new(Arc::clone(&view));
        Self {
            service,
            view,
            catalog,
            presenter,
            notifier,
            inputs,
            interval,
            in_flight: AtomicBool::new(false),
            auto_scan: Mutex::new(None),
        }
    }

    /// Run one scan cycle against the selected exchange.
    ///
    /// Validation failures never reach the network layer. A trigger
    /// arriving while a scan is outstanding is dropped (single-flight
    /// guard). Every other path brackets the cycle with
    /// `set_loading(true)` … `set_loading(false)`.
    pub async fn trigger_scan(
        &self,
        selection: Option<u32>,
        min_profit_input: &str,
    ) -> TriggerOutcome {
        let exchange_id = match selection {
            Some(id) if self.catalog.is_selectable(id) => id,
            _ => {
                self.notifier.show(SELECT_EXCHANGE_MESSAGE);
                return TriggerOutcome::Rejected;
            }
        };

        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!(exchange_id, "Scan already in flight, dropping trigger");
            return TriggerOutcome::Skipped;
        }

        let request = ScanRequest::from_inputs(exchange_id, min_profit_input);
        info!(
            exchange_id = request.exchange_id,
            min_profit = request.min_profit,
            "Starting scan"
        );

        self.view.set_loading(true);
        self.notifier.hide();

        let outcome = match self.service.scan(&request).await {
            Ok(result) => {
                info!(
                    total_pairs = result.total_pairs,
                    opportunities = result.opportunities.len(),
                    scan_time_ms = result.scan_time_ms,
                    "Scan complete"
                );
                self.presenter.render(&result);
                TriggerOutcome::Success
            }
            Err(err) => {
                self.notifier.show(&err.to_string());
                TriggerOutcome::Failed
            }
        };

        self.view.set_loading(false);
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    /// Idempotent two-state auto-scan toggle. Returns the new state.
    ///
    /// Activation spawns the one timer task, firing one interval after
    /// activation and re-reading the operator inputs at each firing.
    /// Deactivation stops the cadence only; a scan already issued runs
    /// to completion and its response is still applied.
    pub fn toggle_auto_scan(self: &Arc<Self>) -> bool {
        let mut slot = self.auto_scan.lock().unwrap();

        if let Some(timer) = slot.take() {
            timer.abort();
            self.view.set_auto_scan_indicator(false);
            info!("Auto-scan deactivated");
            return false;
        }

        let orchestrator = Arc::clone(self);
        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(orchestrator.interval);
            // The first tick of a tokio interval completes immediately;
            // consume it so the first firing lands one interval in.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let firing = Arc::clone(&orchestrator);
                tokio::spawn(async move {
                    let (selection, min_profit) = firing.inputs.current();
                    firing.trigger_scan(selection, &min_profit).await;
                });
            }
        }));

        self.view.set_auto_scan_indicator(true);
        info!(interval_secs = self.interval.as_secs(), "Auto-scan activated");
        true
    }

    /// Whether the auto-scan timer is currently active.
    pub fn is_auto_scan_active(&self) -> bool {
        self.auto_scan.lock().unwrap().is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
