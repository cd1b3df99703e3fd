//! HTTP HEAD probing.
//!
//! Uses the curl crate (libcurl) for one blocking HEAD request and keeps only
//! what the age report needs: the final status code and its `Last-Modified`.

mod error;
mod parse;

pub use error::ProbeError;

use chrono::Utc;
use std::str;
use std::time::Duration;
use url::Url;

use crate::report::ProbeReport;

/// Ceiling for connect + response.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Redirect hops libcurl may follow before giving up.
const MAX_REDIRECTS: u32 = 10;

/// Final response of a HEAD request (after redirects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    pub status: u32,
    /// Raw `Last-Modified` value, if the final response carried a non-empty one.
    pub last_modified: Option<String>,
}

/// Sends `HEAD` with `Cache-Control: no-cache` and a fixed timeout.
#[derive(Debug, Clone)]
pub struct Prober {
    timeout: Duration,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober {
    pub fn new() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Probes `url` and maps the outcome to a report.
    ///
    /// Never fails: a URL that cannot be requested or a transfer that yields
    /// no response becomes [`ProbeReport::unreachable`].
    pub fn probe(&self, url: &str) -> ProbeReport {
        match self.head(url) {
            Ok(response) => {
                let report = ProbeReport::from_response(&response, Utc::now());
                tracing::info!(
                    "HEAD {} -> status={} age={}",
                    url,
                    report.status,
                    report.age
                );
                report
            }
            Err(err) if err.is_timeout() => {
                tracing::warn!("HEAD {} timed out after {:?}", url, self.timeout);
                ProbeReport::unreachable()
            }
            Err(err) => {
                tracing::warn!("HEAD {} failed: {:#}", url, err);
                ProbeReport::unreachable()
            }
        }
    }

    /// Performs the HEAD request and returns the final response.
    ///
    /// Follows redirects. Runs in the current thread; the curl handle is
    /// released before this returns.
    pub fn head(&self, url: &str) -> Result<HeadResponse, ProbeError> {
        let target = Url::parse(url).map_err(|source| ProbeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(ProbeError::UnsupportedScheme {
                url: url.to_string(),
                scheme: target.scheme().to_string(),
            });
        }

        let mut easy = curl::easy::Easy::new();
        easy.url(target.as_str())?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Cache-Control: no-cache")?;
        easy.http_headers(list)?;

        let mut lines: Vec<String> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!("HEAD {} collected {} header lines", target, lines.len());

        Ok(HeadResponse {
            status,
            last_modified: parse::final_last_modified(&lines),
        })
    }
}
