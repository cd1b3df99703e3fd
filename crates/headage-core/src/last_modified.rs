//! `Last-Modified` parsing and age arithmetic.
//!
//! HTTP/1.1 servers may send any of three date layouts: RFC 1123 (preferred),
//! the obsolete RFC 850 form and ANSI C `asctime()`. All of them are GMT.
//! The leading weekday must be a weekday name but is otherwise ignored, as
//! HTTP clients do; only the calendar date counts.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc, Weekday};

/// `Sun, 06 Nov 1994 08:49:37 GMT`, after the weekday.
const RFC1123: &str = "%d %b %Y %H:%M:%S GMT";
/// `Sunday, 06-Nov-94 08:49:37 GMT`, after the weekday.
const RFC850: &str = "%d-%b-%y %H:%M:%S GMT";
/// `Sun Nov  6 08:49:37 1994`, after the weekday.
const ASCTIME: &str = "%b %e %H:%M:%S %Y";

/// Parses an HTTP date in any of the three accepted layouts.
///
/// Returns `None` for anything else, including an empty value.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let naive = match value.split_once(',') {
        Some((weekday, rest)) => {
            weekday.parse::<Weekday>().ok()?;
            let rest = rest.trim_start();
            NaiveDateTime::parse_from_str(rest, RFC1123)
                .ok()
                .or_else(|| parse_rfc850(rest))?
        }
        None => {
            let (weekday, rest) = value.split_once(' ')?;
            weekday.parse::<Weekday>().ok()?;
            NaiveDateTime::parse_from_str(rest, ASCTIME).ok()?
        }
    };
    Some(naive.and_utc())
}

/// Two-digit years 69-99 are 19xx, 00-68 are 20xx.
fn parse_rfc850(rest: &str) -> Option<NaiveDateTime> {
    let naive = NaiveDateTime::parse_from_str(rest, RFC850).ok()?;
    // chrono pivots at 70.
    if naive.year() == 2069 {
        naive.with_year(1969)
    } else {
        Some(naive)
    }
}

/// Whole seconds from `last_modified` to `now`, truncated toward zero.
///
/// Negative when `last_modified` lies in the future (clock skew); not clamped.
pub fn age_seconds(last_modified: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_modified).num_seconds()
}
