//! Operator input state.
//!
//! The auto-scan timer re-reads the current selection and min-profit
//! text at every firing rather than capturing them once, so inputs
//! live behind the `InputSource` port.

use std::sync::Mutex;

#[cfg(test)]
use mockall::automock;

/// Read side of the operator inputs.
#[cfg_attr(test, automock)]
pub trait InputSource: Send + Sync {
    /// Current exchange selection and raw min-profit text.
    fn current(&self) -> (Option<u32>, String);
}

/// Shared mutable inputs the console loop writes into.
#[derive(Default)]
pub struct ScanInputs {
    inner: Mutex<InputsState>,
}

#[derive(Default)]
struct InputsState {
    exchange: Option<u32>,
    min_profit: String,
}

impl ScanInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_exchange(&self, id: u32) {
        self.inner.lock().unwrap().exchange = Some(id);
    }

    pub fn set_min_profit(&self, text: &str) {
        self.inner.lock().unwrap().min_profit = text.to_string();
    }

    pub fn selected_exchange(&self) -> Option<u32> {
        self.inner.lock().unwrap().exchange
    }
}

impl InputSource for ScanInputs {
    fn current(&self) -> (Option<u32>, String) {
        let state = self.inner.lock().unwrap();
        (state.exchange, state.min_profit.clone())
    }
}
