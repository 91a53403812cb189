use audex_types::{
    AuditRecord, EventKind, ExportOptions, Result, SessionTable, micros_remainder,
};

use crate::row::OutputRow;

/// Lazily transform audit records into output rows, one per qualifying
/// QUERY event, in input order.
///
/// A record is skipped (never fatal) when its kind is not QUERY, its
/// database field is empty, its user is the ignored principal, or its
/// session identifier is unknown to the table. The last case only arises
/// when reconstruction ran over a divergent input, which the pipeline does
/// not detect; the row is dropped silently.
pub fn query_rows<'a, I>(
    records: I,
    table: &'a SessionTable,
    options: &'a ExportOptions,
) -> impl Iterator<Item = Result<OutputRow>> + 'a
where
    I: Iterator<Item = Result<AuditRecord>> + 'a,
{
    records.filter_map(move |record| transform_record(record, table, options).transpose())
}

fn transform_record(
    record: Result<AuditRecord>,
    table: &SessionTable,
    options: &ExportOptions,
) -> Result<Option<OutputRow>> {
    let record = record?;

    if record.kind()? != EventKind::Query {
        return Ok(None);
    }

    // Query events without a resolved database are incomplete and unusable
    let database = record.database()?;
    if database.is_empty() {
        return Ok(None);
    }

    if options.skips_user(record.user()?) {
        return Ok(None);
    }

    let session_id = record.session_id()?;
    let Some(logged_in) = table.login(session_id) else {
        return Ok(None);
    };

    let micros = record.timestamp_micros()?;

    Ok(Some(OutputRow {
        host: record.host()?.to_string(),
        database: database.to_string(),
        session_id: session_id.to_string(),
        logged_in: logged_in.to_string(),
        logged_out: table.logout(session_id).unwrap_or_default().to_string(),
        db_user: record.user()?.to_string(),
        sql_start_time: record.event_time()?,
        sql_start_micros: micros_remainder(micros).to_string(),
        sql_text: record.query_text()?.to_string(),
        client_host: record.client_host()?.to_string(),
    }))
}
