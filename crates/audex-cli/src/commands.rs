use super::args::Cli;
use super::handlers;
use anyhow::Result;
use audex_types::ExportOptions;

pub fn run(cli: Cli) -> Result<()> {
    let options = ExportOptions::default();
    handlers::convert::handle(&cli.audit_log, &cli.output, &options)
}
