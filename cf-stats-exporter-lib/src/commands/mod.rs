//! Command-line interface for cf-stats-exporter
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap and hands them to
//! `export`, which:
//!
//! 1. Sets up logging on stderr
//! 2. Resolves [`Settings`] from flags and the `CF_API_TOKEN` / `CF_ZONE_ID`
//!    environment variables, stopping with exit code 1 if either is missing
//! 3. Fetches the metrics through [`crate::analytics::Client`]
//! 4. Prints the metrics as a JSON array to the host's output
//!
//! All process interaction goes through [`Host`], so the whole flow can be driven
//! from tests with in-memory buffers.

mod export;
mod host;
mod logging;
mod run;
mod settings;

pub use export::{ExportArgs, export};
pub use host::Host;
pub use logging::LogLevel;
pub use run::run;
pub use settings::{ConfigError, Settings};
