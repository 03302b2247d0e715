//! Integration test harness.

mod scan_flow;
