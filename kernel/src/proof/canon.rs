//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! All digests that cover JSON must route through [`canonical_json_bytes`].
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order), independent of
//!    whether `serde_json` was built with `preserve_order`.
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are escaped by `serde_json` (RFC 8259); non-ASCII passes through
//!    as UTF-8.
//! 4. Numbers must be integers. Floats are rejected so digests cannot drift
//!    with float formatting.

use std::fmt;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write a scalar.
    Serialize { detail: String },
}

impl fmt::Display for CanonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Number(n) if n.is_f64() => Err(CanonError::NonIntegerNumber { raw: n.to_string() }),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => write_scalar(buf, value),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
            Ok(())
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &Value::String(key.clone()))?;
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
            Ok(())
        }
    }
}

fn write_scalar(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *buf, value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}
