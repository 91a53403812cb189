use audex_types::{AuditRecord, EventKind, ExportOptions, Result, SessionTable};

/// Phase A: bind explicit session bounds from CONNECT/DISCONNECT markers.
///
/// Explicit markers are authoritative; a session can be idle at its start or
/// end with no query activity to witness it. A second marker of the same
/// kind for an already-bound identifier is a duplicate-session error and
/// aborts the run before any output is written.
pub fn scan_connection_markers(
    records: impl Iterator<Item = Result<AuditRecord>>,
    options: &ExportOptions,
    table: &mut SessionTable,
) -> Result<()> {
    for record in records {
        let record = record?;

        if options.skips_user(record.user()?) {
            continue;
        }

        match record.kind()? {
            EventKind::Connect => {
                let time = record.event_time()?;
                table.record_login(record.session_id()?, time)?;
            }
            EventKind::Disconnect => {
                let time = record.event_time()?;
                table.record_logout(record.session_id()?, time)?;
            }
            EventKind::Query | EventKind::Other => {}
        }
    }

    Ok(())
}

/// Phase B: fill and widen session bounds from query activity.
///
/// Most practical logs are incomplete, so sessions without explicit markers
/// end up bounded by the min/max timestamps of their observed queries.
/// Bounds are seeded when absent and only ever widened, one O(1) update per
/// event.
pub fn widen_from_queries(
    records: impl Iterator<Item = Result<AuditRecord>>,
    options: &ExportOptions,
    table: &mut SessionTable,
) -> Result<()> {
    for record in records {
        let record = record?;

        if options.skips_user(record.user()?) {
            continue;
        }
        if record.kind()? != EventKind::Query {
            continue;
        }

        let time = record.event_time()?;
        let session_id = record.session_id()?;
        table.widen_login(session_id, &time);
        table.widen_logout(session_id, &time);
    }

    Ok(())
}

/// Reconstruct session bounds from two passes over the same event source.
///
/// Pure function of its input streams: running it twice over the same log
/// yields identical tables. The table is read-only once handed to the
/// transform pass.
pub fn build_session_table(
    marker_records: impl Iterator<Item = Result<AuditRecord>>,
    query_records: impl Iterator<Item = Result<AuditRecord>>,
    options: &ExportOptions,
) -> Result<SessionTable> {
    let mut table = SessionTable::new();
    scan_connection_markers(marker_records, options, &mut table)?;
    widen_from_queries(query_records, options, &mut table)?;
    Ok(table)
}
