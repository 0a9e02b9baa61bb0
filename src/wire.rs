//! Decoder for the `get_video_info` wire format: `&`-delimited,
//! percent-encoded `key=value` pairs.
//!
//! The same decoder is applied at every nesting level of the response: the
//! top-level body, each comma-delimited stream segment inside
//! `url_encoded_fmt_stream_map` / `adaptive_fmts`, and raw URL strings when
//! probing for an embedded `signature` field.

use std::collections::HashMap;

/// Decode a percent-encoded `key=value&key=value` string into a map.
///
/// Field handling mirrors the endpoint's de-facto protocol:
/// - fields split on `&`, each field on its **first** `=`; fields without an
///   `=` are dropped;
/// - keys are trimmed, empty keys dropped;
/// - values are percent-decoded, then literal `+` becomes a space, then the
///   result is trimmed, in that order, so an encoded `%2B` also ends up as
///   a space;
/// - a value whose percent-data is not valid UTF-8 drops the whole key;
/// - a later occurrence of a key overwrites an earlier one. Entry order
///   carries no meaning and callers must not rely on it.
///
/// Malformed input degrades to fewer entries; this never fails.
pub fn decode_query(raw: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for field in raw.split('&') {
        let Some((key, value)) = field.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let Ok(decoded) = urlencoding::decode(value) else {
            continue;
        };
        let value = decoded.replace('+', " ");
        fields.insert(key.to_string(), value.trim().to_string());
    }

    fields
}
