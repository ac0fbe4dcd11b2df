//! Command dispatch logic for cf-stats-exporter

use super::{ExportArgs, export};
use crate::{Host, Result};
use clap::Parser;

/// Parse command-line arguments and run the export
///
/// This function is designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if configuration is missing, or if the metrics cannot be fetched or printed
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = ExportArgs::parse_from(args);
    export(host, &args).await
}
