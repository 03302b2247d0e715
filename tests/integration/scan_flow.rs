//! End-to-end controller scenarios.
//!
//! Wires the real catalog, orchestrator, notifier, and presenter
//! against the in-memory mock service and recording view.

use std::sync::Arc;
use std::time::Duration;

use arbscan::controller::catalog::ExchangeCatalog;
use arbscan::controller::inputs::{InputSource, ScanInputs};
use arbscan::controller::notifier::ErrorNotifier;
use arbscan::controller::orchestrator::{ScanOrchestrator, TriggerOutcome};
use arbscan::service::ScanService;
use arbscan::types::ProfitBand;
use arbscan::view::ScanView;

use crate::mock_service::{ForcedError, MockScanService, RecordingView};

struct TestRig {
    service: Arc<MockScanService>,
    view: Arc<RecordingView>,
    inputs: Arc<ScanInputs>,
    catalog: Arc<ExchangeCatalog>,
    orchestrator: Arc<ScanOrchestrator>,
}

/// Build the full controller stack around the mock service; the
/// catalog is not yet loaded.
fn rig(service: MockScanService) -> TestRig {
    let service = Arc::new(service);
    let view = Arc::new(RecordingView::new());
    let inputs = Arc::new(ScanInputs::new());

    let catalog = Arc::new(ExchangeCatalog::new(
        service.clone() as Arc<dyn ScanService>,
        view.clone() as Arc<dyn ScanView>,
    ));
    let notifier = Arc::new(ErrorNotifier::new(view.clone() as Arc<dyn ScanView>));
    let orchestrator = Arc::new(ScanOrchestrator::new(
        service.clone() as Arc<dyn ScanService>,
        view.clone() as Arc<dyn ScanView>,
        catalog.clone(),
        notifier,
        inputs.clone() as Arc<dyn InputSource>,
    ));

    TestRig {
        service,
        view,
        inputs,
        catalog,
        orchestrator,
    }
}

async fn loaded_rig(service: MockScanService) -> TestRig {
    let rig = rig(service);
    rig.catalog.load().await.unwrap();
    rig
}

// -- Catalog ---------------------------------------------------------------

#[tokio::test]
async fn only_enabled_exchanges_become_selectable() {
    let rig = loaded_rig(MockScanService::new()).await;

    let state = rig.view.state();
    assert_eq!(state.exchanges.len(), 1);
    assert_eq!(state.exchanges[0].name, "A");
    assert!(state.scan_enabled);

    assert!(rig.catalog.is_selectable(1));
    assert!(!rig.catalog.is_selectable(2));
}

#[tokio::test]
async fn scan_against_disabled_exchange_never_hits_network() {
    let rig = loaded_rig(MockScanService::new()).await;
    rig.inputs.select_exchange(2);

    let (selection, min_profit) = rig.inputs.current();
    let outcome = rig.orchestrator.trigger_scan(selection, &min_profit).await;

    assert_eq!(outcome, TriggerOutcome::Rejected);
    assert!(rig.service.recorded_requests().is_empty());
    assert_eq!(
        rig.view.state().visible_error.as_deref(),
        Some("Please select an exchange")
    );
}

// -- Successful scan -------------------------------------------------------

#[tokio::test]
async fn successful_scan_renders_banded_table() {
    let service = MockScanService::new();
    service.set_result(MockScanService::high_band_result());
    let rig = loaded_rig(service).await;
    rig.inputs.select_exchange(1);

    let outcome = rig.orchestrator.trigger_scan(Some(1), "0.5").await;
    assert_eq!(outcome, TriggerOutcome::Success);

    let state = rig.view.state();
    let summary = state.summary.expect("summary written");
    assert_eq!(summary.total_pairs, 412);
    assert_eq!(summary.opportunity_count, 1);
    assert_eq!(summary.scan_time_ms, 87);

    assert_eq!(state.tables.len(), 1);
    let row = &state.tables[0][0];
    assert_eq!(row.row_band, ProfitBand::High);
    assert_eq!(row.gross_band, ProfitBand::High);
    assert_eq!(row.net_band, ProfitBand::High);
    assert_eq!(row.gross_profit, "2.5000%");
    assert_eq!(row.estimated_fees, "0.3000%");
    assert_eq!(row.net_profit, "2.2000%");

    // Loading bracketed the cycle and ended cleared.
    assert_eq!(state.loading_transitions, vec![true, false]);
    assert!(!state.loading);
    assert!(!state.placeholder_shown);
}

#[tokio::test]
async fn empty_scan_renders_placeholder_and_no_table() {
    let rig = loaded_rig(MockScanService::new()).await;

    rig.orchestrator.trigger_scan(Some(1), "").await;

    let state = rig.view.state();
    assert!(state.placeholder_shown);
    assert!(state.tables.is_empty());
}

#[tokio::test]
async fn blank_min_profit_defaults_on_the_wire() {
    let rig = loaded_rig(MockScanService::new()).await;

    rig.orchestrator.trigger_scan(Some(1), "").await;
    rig.orchestrator.trigger_scan(Some(1), "not a number").await;

    let requests = rig.service.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert!((requests[0].min_profit - 0.1).abs() < 1e-12);
    assert!((requests[1].min_profit - 0.1).abs() < 1e-12);
}

// -- Failure paths ---------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn server_error_message_shown_then_auto_hidden() {
    let service = MockScanService::new();
    service.set_error(ForcedError::Server {
        status: 422,
        message: "unsupported exchange".to_string(),
    });
    let rig = loaded_rig(service).await;

    let outcome = rig.orchestrator.trigger_scan(Some(1), "").await;
    assert_eq!(outcome, TriggerOutcome::Failed);

    let state = rig.view.state();
    assert_eq!(state.visible_error.as_deref(), Some("unsupported exchange"));
    assert_eq!(state.loading_transitions, vec![true, false]);

    // Let the spawned dismissal task register its sleep before the
    // paused clock is advanced.
    tokio::task::yield_now().await;

    // Auto-dismissal fires at the 5-second mark.
    tokio::time::advance(Duration::from_millis(5_001)).await;
    tokio::task::yield_now().await;
    assert_eq!(rig.view.state().visible_error, None);
}

#[tokio::test]
async fn transport_error_reported_and_recoverable() {
    let service = MockScanService::new();
    service.set_error(ForcedError::Transport("connection reset".to_string()));
    let rig = loaded_rig(service).await;

    let outcome = rig.orchestrator.trigger_scan(Some(1), "").await;
    assert_eq!(outcome, TriggerOutcome::Failed);
    assert_eq!(
        rig.view.state().visible_error.as_deref(),
        Some("Network error: connection reset")
    );

    // The next trigger is the retry mechanism.
    let rig_state = rig.view.state();
    assert!(!rig_state.loading);
    let outcome = rig.orchestrator.trigger_scan(Some(1), "").await;
    assert_eq!(outcome, TriggerOutcome::Failed);
    assert_eq!(rig.service.recorded_requests().len(), 2);
}

#[tokio::test]
async fn catalog_failure_leaves_triggers_disabled() {
    let rig = rig(MockScanService::new());
    // Note: load not called — triggers were never enabled.
    let outcome = rig.orchestrator.trigger_scan(Some(1), "").await;
    assert_eq!(outcome, TriggerOutcome::Rejected);
    assert!(!rig.view.state().scan_enabled);
}

#[tokio::test]
async fn new_scan_clears_previous_error() {
    let service = MockScanService::new();
    service.set_error(ForcedError::Transport("down".to_string()));
    let rig = loaded_rig(service).await;

    rig.orchestrator.trigger_scan(Some(1), "").await;
    assert!(rig.view.state().visible_error.is_some());

    // An in-cycle hide happens before the next request is issued, and
    // the new failure replaces the old message.
    rig.service
        .set_error(ForcedError::Transport("still down".to_string()));
    rig.orchestrator.trigger_scan(Some(1), "").await;
    assert_eq!(
        rig.view.state().visible_error.as_deref(),
        Some("Network error: still down")
    );
}

// -- Auto-scan -------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn auto_scan_full_cycle_through_the_stack() {
    let service = MockScanService::new();
    service.set_result(MockScanService::high_band_result());
    let rig = loaded_rig(service).await;
    rig.inputs.select_exchange(1);
    rig.inputs.set_min_profit("0.3");

    assert!(rig.orchestrator.toggle_auto_scan());
    assert!(rig.view.state().auto_scan_active);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(10)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    let requests = rig.service.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].exchange_id, 1);
    assert!((requests[0].min_profit - 0.3).abs() < 1e-12);
    assert_eq!(rig.view.state().tables.len(), 1);

    assert!(!rig.orchestrator.toggle_auto_scan());
    assert!(!rig.view.state().auto_scan_active);
    assert!(!rig.orchestrator.is_auto_scan_active());
}
