use audex_engine::build_session_table;
use audex_log::AuditLogReader;
use audex_types::{AuditRecord, Error, ExportOptions, Result, SessionMarker, format_epoch_micros};

fn records(input: &str) -> impl Iterator<Item = Result<AuditRecord>> + '_ {
    AuditLogReader::new(input.as_bytes())
}

fn fmt(micros: i64) -> String {
    format_epoch_micros(micros).expect("timestamp in range")
}

#[test]
fn test_explicit_markers_bound_the_session() {
    let log = "\
1000000,hostA,alice,cliA,S1,0,CONNECT,,
2000000,hostA,alice,cliA,S1,0,QUERY,db1,'SELECT 1'
3000000,hostA,alice,cliA,S1,0,DISCONNECT,,
";
    let options = ExportOptions::default();
    let table = build_session_table(records(log), records(log), &options).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.login("S1"), Some(fmt(1_000_000).as_str()));
    assert_eq!(table.logout("S1"), Some(fmt(3_000_000).as_str()));
}

#[test]
fn test_markerless_session_bounded_by_query_min_max() {
    // Queries arrive out of chronological order; bounds still converge on
    // the min/max timestamps.
    let log = "\
5000000,hostA,alice,cliA,S9,0,QUERY,db1,'SELECT 1'
2000000,hostA,alice,cliA,S9,0,QUERY,db1,'SELECT 2'
9000000,hostA,alice,cliA,S9,0,QUERY,db1,'SELECT 3'
";
    let options = ExportOptions::default();
    let table = build_session_table(records(log), records(log), &options).unwrap();

    assert_eq!(table.login("S9"), Some(fmt(2_000_000).as_str()));
    assert_eq!(table.logout("S9"), Some(fmt(9_000_000).as_str()));
}

#[test]
fn test_connect_only_session_gets_logout_from_queries() {
    let log = "\
1000000,hostA,alice,cliA,S1,0,CONNECT,,
4000000,hostA,alice,cliA,S1,0,QUERY,db1,'SELECT 1'
";
    let options = ExportOptions::default();
    let table = build_session_table(records(log), records(log), &options).unwrap();

    assert_eq!(table.login("S1"), Some(fmt(1_000_000).as_str()));
    assert_eq!(table.logout("S1"), Some(fmt(4_000_000).as_str()));
}

#[test]
fn test_reconstruction_is_idempotent() {
    let log = "\
1000000,hostA,alice,cliA,S1,0,CONNECT,,
2000000,hostB,bob,cliB,S2,0,QUERY,db2,'SELECT 2'
3000000,hostA,alice,cliA,S1,0,DISCONNECT,,
";
    let options = ExportOptions::default();
    let first = build_session_table(records(log), records(log), &options).unwrap();
    let second = build_session_table(records(log), records(log), &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_ignored_principal_is_excluded_from_reconstruction() {
    let log = "\
1000000,hostA,rdsadmin,cliA,S1,0,CONNECT,,
2000000,hostA,rdsadmin,cliA,S1,0,QUERY,mysql,'SELECT 1'
";
    let options = ExportOptions::default();
    let table = build_session_table(records(log), records(log), &options).unwrap();

    assert!(table.is_empty());
}

#[test]
fn test_duplicate_connect_reports_both_timestamps() {
    let log = "\
1000000,hostA,alice,cliA,S2,0,CONNECT,,
5000000,hostB,bob,cliB,S2,0,CONNECT,,
";
    let options = ExportOptions::default();
    let err = build_session_table(records(log), records(log), &options).unwrap_err();

    match err {
        Error::DuplicateSession {
            session_id,
            marker,
            existing,
            conflicting,
        } => {
            assert_eq!(session_id, "S2");
            assert_eq!(marker, SessionMarker::Connect);
            assert_eq!(existing, fmt(1_000_000));
            assert_eq!(conflicting, fmt(5_000_000));
        }
        other => panic!("expected DuplicateSession, got {:?}", other),
    }
}

#[test]
fn test_duplicate_disconnect_is_also_a_conflict() {
    let log = "\
1000000,hostA,alice,cliA,S3,0,DISCONNECT,,
2000000,hostA,alice,cliA,S3,0,DISCONNECT,,
";
    let options = ExportOptions::default();
    let err = build_session_table(records(log), records(log), &options).unwrap_err();

    assert!(matches!(
        err,
        Error::DuplicateSession {
            marker: SessionMarker::Disconnect,
            ..
        }
    ));
}

#[test]
fn test_non_integer_timestamp_aborts_with_line() {
    let log = "\
1000000,hostA,alice,cliA,S1,0,CONNECT,,
oops,hostA,alice,cliA,S1,0,DISCONNECT,,
";
    let options = ExportOptions::default();
    let err = build_session_table(records(log), records(log), &options).unwrap_err();

    match err {
        Error::Malformed { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_other_event_kinds_are_ignored() {
    let log = "\
1000000,hostA,alice,cliA,S1,0,FAILED_CONNECT,,
2000000,hostA,alice,cliA,S1,0,SHUTDOWN,,
";
    let options = ExportOptions::default();
    let table = build_session_table(records(log), records(log), &options).unwrap();

    assert!(table.is_empty());
}
