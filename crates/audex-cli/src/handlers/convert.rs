use anyhow::{Context, Result};
use audex_engine::{OUTPUT_HEADER, query_rows, scan_connection_markers, widen_from_queries};
use audex_log::AuditLogReader;
use audex_types::{ExportOptions, SessionTable};
use csv::QuoteStyle;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::progress::Progress;

/// Run the full export: two reconstruction passes over the audit log, then
/// the transform pass that writes the CSV. The log is opened fresh for each
/// pass, so memory stays bounded by the number of distinct sessions.
pub fn handle(audit_log: &Path, output: &Path, options: &ExportOptions) -> Result<()> {
    let mut table = SessionTable::new();

    println!("Create session list by CONNECT/DISCONNECT");
    let records = Progress::new(open_log(audit_log)?, options.progress_interval);
    scan_connection_markers(records, options, &mut table)?;

    println!("Create session list by QUERY");
    let records = Progress::new(open_log(audit_log)?, options.progress_interval);
    widen_from_queries(records, options, &mut table)?;

    println!("no. of sessions:{}", table.len());

    println!("Create sql list and output to the file");
    // Every output column is text, numeric-looking or not; quote them all
    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    writer.write_record(OUTPUT_HEADER)?;

    let records = Progress::new(open_log(audit_log)?, options.progress_interval);
    let mut rows: u64 = 0;
    for row in query_rows(records, &table, options) {
        writer.write_record(row?.as_record())?;
        rows += 1;
    }
    writer.flush()?;

    let summary = format!("Exported {} rows to {}", rows, output.display());
    if std::io::stdout().is_terminal() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn open_log(path: &Path) -> Result<AuditLogReader<BufReader<File>>> {
    AuditLogReader::open(path).with_context(|| format!("failed to open {}", path.display()))
}
