//! JSON encoding of stored event records

use seqhost_core::{AppName, StoredEvent};
use std::fmt::Write;

/// Encode a string with JSON escaping, including the surrounding quotes
pub fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Encode an ordered slice of records as a JSON array
///
/// Each record becomes an object with keys `sequence` (number), `app_name`
/// (string), `func` (string), and `args` (string). The `args` value is the
/// pre-encoded blob stored with the record and is embedded verbatim between
/// quotes — it was made embedding-safe at encode time and must not be
/// escaped again.
pub fn encode_records(app: &AppName, records: &[StoredEvent]) -> String {
    let mut out = String::from("[");
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(
            out,
            "{{\"sequence\":{},\"app_name\":{},\"func\":{},\"args\":\"{}\"}}",
            record.sequence,
            encode_string(app.as_str()),
            encode_string(&record.func),
            record.args,
        );
    }
    out.push(']');
    out
}
