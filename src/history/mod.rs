//! # Request History
//!
//! In-memory record of every HTTP round trip the suite performs, kept in
//! execution order and surfaced in the JSON run report.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::http::method::HttpMethod;

/// Maximum number of history entries to retain.
const MAX_HISTORY_ENTRIES: usize = 100;

/// A single round trip and its outcome. `status` is `None` when the request
/// never completed.
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub timestamp: u64,
    pub method: HttpMethod,
    pub path: String,
    pub status: Option<u16>,
    pub duration_ms: u64,
}

impl RequestRecord {
    /// Record for a round trip that just finished.
    pub fn now(method: HttpMethod, path: impl Into<String>, status: Option<u16>, duration_ms: u64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            method,
            path: path.into(),
            status,
            duration_ms,
        }
    }
}

/// Ordered request log with bounded memory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestLog {
    entries: VecDeque<RequestRecord>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append an entry, evicting the oldest once the cap is reached.
    pub fn push(&mut self, record: RequestRecord) {
        if self.entries.len() >= MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// All entries in execution order (oldest first).
    pub fn entries(&self) -> &VecDeque<RequestRecord> {
        &self.entries
    }
}
