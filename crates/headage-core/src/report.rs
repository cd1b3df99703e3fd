//! The `{age, status}` record printed for each probe.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::fetch_head::HeadResponse;
use crate::last_modified::{age_seconds, parse_http_date};

/// Outcome of one probe. Field order is the JSON field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Seconds since `Last-Modified`; 0 when the header is missing or unparsable.
    pub age: i64,
    /// Final HTTP status code, or 0 when no response was received.
    pub status: u32,
}

impl ProbeReport {
    /// Sentinel for "no response": the request could not be built or sent.
    pub const fn unreachable() -> Self {
        Self { age: 0, status: 0 }
    }

    /// Maps a received response to a report, measuring age against `now`.
    pub fn from_response(response: &HeadResponse, now: DateTime<Utc>) -> Self {
        let age = match response.last_modified.as_deref() {
            Some(raw) => match parse_http_date(raw) {
                Some(lm) => age_seconds(lm, now),
                None => {
                    tracing::debug!("unparsable Last-Modified {:?}; age=0", raw);
                    0
                }
            },
            None => 0,
        };
        Self {
            age,
            status: response.status,
        }
    }

    /// Writes the report as one compact JSON object followed by a newline.
    pub fn write_json_line<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer(&mut out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
