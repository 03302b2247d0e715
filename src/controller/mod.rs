//! Scan orchestration.
//!
//! The controller components, leaves first:
//! - `catalog` — loads the exchange list, publishes the enabled subset
//! - `notifier` — transient auto-expiring failure messages
//! - `presenter` — classified, ranked scan report
//! - `inputs` — shared operator input state, re-read by the timer
//! - `orchestrator` — the scan trigger / auto-scan state machine

pub mod catalog;
pub mod inputs;
pub mod notifier;
pub mod orchestrator;
pub mod presenter;
