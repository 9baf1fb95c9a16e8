//! Selective field serialization for write payloads.
//!
//! The server assigns identifiers on creation, so a create payload must not
//! carry a client-side identity field. Encoding runs the value through the
//! generic serde machinery and then applies a per-field inclusion policy on
//! the resulting object; decoding is a plain pass-through with no policy.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// The operation a payload is being encoded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Create,
    Update,
    Delete,
}

/// True for field keys that name the server-assigned identifier.
///
/// Matching is case-insensitive and ignores the `$` sigil the wire uses for
/// server-owned fields, so `id`, `Id` and `$id` are all identity keys.
fn is_identity_key(key: &str) -> bool {
    key.strip_prefix('$').unwrap_or(key).eq_ignore_ascii_case("id")
}

/// Encode `value` for the given action.
///
/// Objects are decomposed field by field: unset fields (JSON null) are
/// omitted rather than sent as null markers, and for [`Action::Create`] any
/// identity field is stripped entirely. The other actions apply no
/// exclusion; an identifier present on update or delete is sent as-is,
/// since it is how the server addresses the document.
///
/// Primitives (strings, integers, floats, booleans) and arrays are never
/// decomposed; they pass through as their literal wire representation.
pub fn encode<T: Serialize>(value: &T, action: Action) -> Result<Value> {
    let encoded = serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))?;

    let Value::Object(fields) = encoded else {
        return Ok(encoded);
    };

    let fields = fields
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .filter(|(k, _)| !(action == Action::Create && is_identity_key(k)))
        .collect();

    Ok(Value::Object(fields))
}

/// Decode a response body into `T`.
///
/// A failure carries the offending payload so callers can tell a malformed
/// response apart from a transport problem.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| Error::Decode {
        message: e.to_string(),
        payload: payload.to_string(),
    })
}
