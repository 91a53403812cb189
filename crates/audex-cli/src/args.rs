use clap::Parser;
use std::path::PathBuf;

/// The invocation surface is deliberately just the two paths. The
/// ignore-principal toggle and the progress interval are startup
/// configuration (`ExportOptions::default()`), not runtime flags.
#[derive(Parser)]
#[command(name = "audex")]
#[command(about = "Convert a MySQL audit log into a session-joined CSV export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Audit log to read
    #[arg(value_name = "AUDIT_LOG")]
    pub audit_log: PathBuf,

    /// CSV file to write
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: PathBuf,
}
