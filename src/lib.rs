//! crypto-feed: Crypto price feed loading
//!
//! This library provides:
//! - Feed domain types and the load use case contract
//! - An HTTP client contract with a reqwest-backed CryptoCompare client
//! - A remote load use case that classifies failures into domain errors
//! - Configuration, CLI and observability

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod telemetry;
