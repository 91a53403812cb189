use std::collections::HashMap;

use crate::error::{Error, Result, SessionMarker};

/// Session bounds inferred from the audit log: session identifier to
/// formatted login/logout timestamps at second granularity.
///
/// Built once by reconstruction, then read-only during the transform pass.
/// Timestamps are fixed-width YYYYMMDDHHMMSS strings, so lexical order is
/// chronological and the widening operations compare strings directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTable {
    logins: HashMap<String, String>,
    logouts: HashMap<String, String>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self, session_id: &str) -> Option<&str> {
        self.logins.get(session_id).map(String::as_str)
    }

    pub fn logout(&self, session_id: &str) -> Option<&str> {
        self.logouts.get(session_id).map(String::as_str)
    }

    /// Number of sessions with a known login time
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Record an explicit login time from a CONNECT marker.
    ///
    /// At most one login per identifier: a second CONNECT is a
    /// duplicate-session error carrying both timestamps.
    pub fn record_login(&mut self, session_id: &str, time: String) -> Result<()> {
        if let Some(existing) = self.logins.get(session_id) {
            return Err(Error::DuplicateSession {
                session_id: session_id.to_string(),
                marker: SessionMarker::Connect,
                existing: existing.clone(),
                conflicting: time,
            });
        }
        self.logins.insert(session_id.to_string(), time);
        Ok(())
    }

    /// Record an explicit logout time from a DISCONNECT marker.
    pub fn record_logout(&mut self, session_id: &str, time: String) -> Result<()> {
        if let Some(existing) = self.logouts.get(session_id) {
            return Err(Error::DuplicateSession {
                session_id: session_id.to_string(),
                marker: SessionMarker::Disconnect,
                existing: existing.clone(),
                conflicting: time,
            });
        }
        self.logouts.insert(session_id.to_string(), time);
        Ok(())
    }

    /// Widen the login bound from query activity: seed it when absent,
    /// lower it when `time` sorts earlier. Never raises an existing bound.
    pub fn widen_login(&mut self, session_id: &str, time: &str) {
        match self.logins.get_mut(session_id) {
            Some(existing) => {
                if time < existing.as_str() {
                    *existing = time.to_string();
                }
            }
            None => {
                self.logins.insert(session_id.to_string(), time.to_string());
            }
        }
    }

    /// Widen the logout bound from query activity: seed it when absent,
    /// raise it when `time` sorts later. Never lowers an existing bound.
    pub fn widen_logout(&mut self, session_id: &str, time: &str) {
        match self.logouts.get_mut(session_id) {
            Some(existing) => {
                if time > existing.as_str() {
                    *existing = time.to_string();
                }
            }
            None => {
                self.logouts.insert(session_id.to_string(), time.to_string());
            }
        }
    }
}
