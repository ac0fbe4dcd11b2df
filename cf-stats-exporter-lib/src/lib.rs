#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for cf-stats-exporter
//!
//! This library holds all functionality for the `cf-stats-exporter` tool, which
//! asks the Cloudflare analytics API how a zone's HTTP responses were distributed
//! across status codes and prints the answer as JSON.
//!
//! # Module Organization
//!
//! - [`analytics`]: GraphQL query construction, the API client, and response decoding
//! - `commands`: Command-line parsing, configuration, and output

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analytics;
mod commands;

pub use crate::commands::{ConfigError, ExportArgs, Host, LogLevel, Settings, export, run};
