//! Report rendering in table, JSON or CSV form.

use std::io::Write;

use pricer_mc::mc::EstimateSeries;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A printable command result.
///
/// JSON output serialises the whole value; table and CSV output use
/// [`Report::rows`].
pub trait Report: Serialize {
    /// Label/value pairs in display order.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Writes `report` to `writer` in `format`.
pub fn render<R: Report, W: Write>(report: &R, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(&report.rows(), writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(["metric", "value"])?;
            for (label, value) in report.rows() {
                csv.write_record([label, value.as_str()])?;
            }
            csv.flush()?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(rows: &[(&'static str, String)], writer: &mut W) -> Result<()> {
    let left = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0).max(6);
    let right = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let rule = |l: &str, m: &str, r: &str| {
        format!("{l}{}{m}{}{r}", "─".repeat(left + 2), "─".repeat(right + 2))
    };

    writeln!(writer, "{}", rule("┌", "┬", "┐"))?;
    writeln!(writer, "│ {:<left$} │ {:<right$} │", "Metric", "Value")?;
    writeln!(writer, "{}", rule("├", "┼", "┤"))?;
    for (label, value) in rows {
        writeln!(writer, "│ {:<left$} │ {:>right$} │", label, value)?;
    }
    writeln!(writer, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

/// Writes the raw estimates, one per slot in draw order.
///
/// JSON gives a bare array; table and CSV both give `index,estimate` rows.
pub fn write_series<W: Write>(
    series: &EstimateSeries,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, series)?;
            writeln!(writer)?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(["index", "estimate"])?;
            for (i, estimate) in series.iter().enumerate() {
                csv.serialize((i, estimate))?;
            }
            csv.flush()?;
        }
    }
    Ok(())
}

/// Fixed-precision float for display rows.
pub(crate) fn fmt_f64(x: f64) -> String {
    format!("{:.6}", x)
}
