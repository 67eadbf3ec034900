// crates/cli/src/presentation.rs
use crate::config::PresentationOptions;
use crate::error::Result;
use crate::options::OutputFormat;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use xwc_engine::InputObserver;
use xwc_engine::report::Report;
use xwc_engine::source::InputSource;

/// Writes the report in the requested format.
///
/// # Errors
///
/// Fails when `out` cannot be written to or JSON serialization fails.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    options: &PresentationOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Tsv => write_tsv(out, report)?,
        OutputFormat::Json => write_json(out, report)?,
    }
    out.flush()?;
    Ok(())
}

/// Column title of a source: the path for files, `""` for standard input.
fn header_name(source: &InputSource) -> String {
    match source {
        InputSource::Stdin { .. } => "\"\"".to_string(),
        InputSource::File(path) => path.display().to_string(),
    }
}

/// Header line with one column per input, then one line per reported word.
/// The count of a word sits in the column of the input it was seen in.
fn write_tsv<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    if let Some(filter) = &report.filter {
        write!(out, "{}", header_name(filter))?;
    }
    for input in &report.inputs {
        write!(out, "\t{}", header_name(input))?;
    }
    writeln!(out)?;

    for word in report.words() {
        let offset = word.channel().single().map_or(0, |id| id.offset());
        writeln!(
            out,
            "{}\t{}{}",
            word.text(),
            "\t".repeat(offset),
            word.count()
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonWord<'a> {
    word: &'a str,
    count: u64,
    /// 1-based input number.
    channel: u32,
    input: String,
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    // Reported words are always exclusive to one input.
    let rows: Vec<JsonWord<'_>> = report
        .words()
        .filter_map(|w| {
            let id = w.channel().single()?;
            Some(JsonWord {
                word: w.text(),
                count: w.count(),
                channel: id.get(),
                input: header_name(report.input_of(w)?),
            })
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

/// Tells the user when standard input is being read and when it is done.
#[derive(Debug, Clone, Copy)]
pub struct StdinBanner {
    color: bool,
}

impl StdinBanner {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn show(self, message: &str) {
        if self.color {
            eprintln!("{}", message.black().on_white());
        } else {
            eprintln!("{message}");
        }
    }
}

impl InputObserver for StdinBanner {
    fn on_start(&mut self, source: &InputSource) {
        if let InputSource::Stdin { name } = source {
            self.show(&format!("--- starts reading for {name} FILE"));
        }
    }

    fn on_finish(&mut self, source: &InputSource) {
        if let InputSource::Stdin { name } = source {
            self.show(&format!("--- ends reading for {name} FILE"));
        }
    }
}
