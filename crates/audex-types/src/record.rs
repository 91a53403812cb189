use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::format_epoch_micros;

const FIELD_TIMESTAMP: usize = 0;
const FIELD_HOST: usize = 1;
const FIELD_USER: usize = 2;
const FIELD_CLIENT_HOST: usize = 3;
const FIELD_SESSION_ID: usize = 4;
const FIELD_KIND: usize = 6;
const FIELD_DATABASE: usize = 7;
const FIELD_QUERY_TEXT: usize = 8;

/// Event kind of an audit record (field 6)
///
/// Anything that is not a connection marker or a query (FAILED_CONNECT,
/// SHUTDOWN, ...) maps to `Other` and is ignored by every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Connect,
    Disconnect,
    Query,
    Other,
}

impl EventKind {
    pub fn from_field(value: &str) -> Self {
        match value {
            "CONNECT" => EventKind::Connect,
            "DISCONNECT" => EventKind::Disconnect,
            "QUERY" => EventKind::Query,
            _ => EventKind::Other,
        }
    }
}

/// One parsed audit log line: the 1-based source line number plus the
/// positionally addressed fields.
///
/// Fields are only ever accessed by position. The accessors are fallible:
/// a missing index or a non-integer timestamp is a malformed-record error
/// carrying the source line, per the no-recovery contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    line: u64,
    fields: Vec<String>,
}

impl AuditRecord {
    /// Fields 0..=6 are required of every record; database and query text
    /// are demanded only for QUERY events.
    pub const MIN_FIELDS: usize = FIELD_KIND + 1;

    pub fn new(line: u64, fields: Vec<String>) -> Self {
        AuditRecord { line, fields }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    fn field(&self, index: usize, name: &str) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::malformed(self.line, format!("missing {} field", name)))
    }

    /// Event timestamp in epoch microseconds (field 0)
    pub fn timestamp_micros(&self) -> Result<i64> {
        let raw = self.field(FIELD_TIMESTAMP, "timestamp")?;
        raw.parse().map_err(|_| {
            Error::malformed(self.line, format!("timestamp is not an integer: {:?}", raw))
        })
    }

    /// Event time formatted at second granularity (local wall-clock)
    pub fn event_time(&self) -> Result<String> {
        let micros = self.timestamp_micros()?;
        format_epoch_micros(micros)
            .ok_or_else(|| Error::malformed(self.line, format!("timestamp out of range: {}", micros)))
    }

    pub fn host(&self) -> Result<&str> {
        self.field(FIELD_HOST, "host")
    }

    pub fn user(&self) -> Result<&str> {
        self.field(FIELD_USER, "user")
    }

    pub fn client_host(&self) -> Result<&str> {
        self.field(FIELD_CLIENT_HOST, "client host")
    }

    pub fn session_id(&self) -> Result<&str> {
        self.field(FIELD_SESSION_ID, "session id")
    }

    pub fn kind(&self) -> Result<EventKind> {
        Ok(EventKind::from_field(self.field(FIELD_KIND, "event kind")?))
    }

    pub fn database(&self) -> Result<&str> {
        self.field(FIELD_DATABASE, "database")
    }

    pub fn query_text(&self) -> Result<&str> {
        self.field(FIELD_QUERY_TEXT, "query text")
    }
}
