//! Exchange catalog.
//!
//! Fetches the tradable exchange list once at startup and exposes only
//! the enabled subset as selectable options. A successful load is the
//! precondition for enabling scan triggers; on failure the triggers
//! stay disabled and no retry is attempted automatically.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::service::{ScanError, ScanService};
use crate::types::Exchange;
use crate::view::ScanView;

pub struct ExchangeCatalog {
    service: Arc<dyn ScanService>,
    view: Arc<dyn ScanView>,
    enabled: RwLock<Vec<Exchange>>,
    ready: AtomicBool,
}

impl ExchangeCatalog {
    pub fn new(service: Arc<dyn ScanService>, view: Arc<dyn ScanView>) -> Self {
        Self {
            service,
            view,
            enabled: RwLock::new(Vec::new()),
            ready: AtomicBool::new(false),
        }
    }

    /// Fetch the catalog, publish the enabled subset, and enable scan
    /// triggers. The caller routes a returned error to the notifier.
    pub async fn load(&self) -> Result<(), ScanError> {
        let all = self.service.fetch_exchanges().await.map_err(|e| {
            warn!(error = %e, "Exchange catalog load failed");
            e
        })?;

        let selectable: Vec<Exchange> = all.into_iter().filter(|e| e.enabled).collect();
        info!(count = selectable.len(), "Exchange catalog loaded");

        self.view.set_exchanges(&selectable);
        *self.enabled.write().unwrap() = selectable;
        self.ready.store(true, Ordering::SeqCst);
        self.view.set_scan_enabled(true);

        Ok(())
    }

    /// Whether `id` references a loaded, enabled exchange.
    pub fn is_selectable(&self, id: u32) -> bool {
        self.enabled.read().unwrap().iter().any(|e| e.id == id)
    }

    /// Whether the catalog has published at least once.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// The currently selectable exchanges (enabled only).
    pub fn selectable(&self) -> Vec<Exchange> {
        self.enabled.read().unwrap().clone()
    }
}
