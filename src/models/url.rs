use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored short link together with its access counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub click_count: u64,
}

/// Observable lifecycle of a record. `Fresh -> Accessed` is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Fresh,
    Accessed,
}

impl ShortLinkRecord {
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
            last_accessed_at: None,
            click_count: 0,
        }
    }

    pub fn state(&self) -> LinkState {
        if self.click_count == 0 {
            LinkState::Fresh
        } else {
            LinkState::Accessed
        }
    }

    /// Count one access at `now`.
    ///
    /// The access time never moves backwards, so `created_at <= last_accessed_at`
    /// holds even if the wall clock steps back between calls.
    pub(crate) fn record_access(&mut self, now: DateTime<Utc>) {
        let floor = self.last_accessed_at.unwrap_or(self.created_at);
        self.click_count += 1;
        self.last_accessed_at = Some(now.max(floor));
    }
}

/// Body of `POST /api/shorten`. Parsed from a raw JSON value so each
/// malformed shape can get its own error message.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl From<ShortLinkRecord> for StatsResponse {
    fn from(record: ShortLinkRecord) -> Self {
        Self {
            url: record.original_url,
            clicks: record.click_count,
            created_at: record.created_at,
            last_accessed_at: record.last_accessed_at,
        }
    }
}
