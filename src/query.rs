//! Query-string encoding for request parameter sets.
//!
//! Parameter structs derive `Serialize` and use the helpers here as field
//! attributes, so the struct definition alone describes the wire format:
//!
//! - `skip_serializing_if = "is_blank"`: `None`, `""` and whitespace-only
//!   strings are left out of the query entirely
//! - `serialize_with = "comma_joined"`: lists go out as one `a,b,c` value
//!   instead of repeated keys

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Serialize a list of identifiers as a single comma-separated value.
pub fn comma_joined<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .join(",");
    serializer.serialize_str(&joined)
}

/// `true` when an optional string carries nothing worth sending.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// `true` when a list has no non-blank entries.
pub fn is_empty_list(values: &[String]) -> bool {
    values.iter().all(|v| v.trim().is_empty())
}

/// Encode a parameter struct as an `application/x-www-form-urlencoded` query.
///
/// Returns an empty string when every field is absent.
pub fn encode<T: Serialize>(params: &T) -> Result<String, serde_urlencoded::ser::Error> {
    serde_urlencoded::to_string(params)
}
