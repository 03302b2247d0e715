//! ARBSCAN — console controller for a remote crypto arbitrage scanner
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod controller;
pub mod service;
pub mod types;
pub mod view;
