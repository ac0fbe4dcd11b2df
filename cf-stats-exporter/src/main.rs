//! Export the HTTP status-code distribution of a Cloudflare zone as JSON.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use cf_stats_exporter_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host backed by the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main(flavor = "current_thread")]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
