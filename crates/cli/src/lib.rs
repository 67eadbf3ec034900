// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use std::io::{BufWriter, IsTerminal};

use crate::config::{Config, PresentationOptions};
use crate::error::Result;
use crate::presentation::StdinBanner;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count every input of `config` and print the exclusive words to stdout.
///
/// # Errors
///
/// Returns the first engine error (open, read, capacity) or output error.
pub fn run(config: &Config, presentation: &PresentationOptions) -> Result<()> {
    let color = presentation.color.enabled(std::io::stderr().is_terminal());
    colored::control::set_override(color);

    let mut banner = StdinBanner::new(color);
    let report = xwc_engine::run_with(config, &mut banner)?;
    log::debug!(
        "{} distinct words, {} reported",
        report.counter.len(),
        report.words().count()
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    presentation::write_report(&mut out, &report, presentation)
}
