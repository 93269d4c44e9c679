//! Wall-clock helpers usable from both the browser and native tests.
//!
//! `chrono`'s `wasmbind` feature reads the JS `Date` on wasm32, so the same
//! calls work in either context.

use chrono::{SecondsFormat, Utc};

/// Current UTC time formatted like JS `Date.prototype.toISOString`
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}
