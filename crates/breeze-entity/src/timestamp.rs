//! Parse-tolerant timestamp deserialization.
//!
//! The store's timestamp fields are not reliable: older records omit
//! them, a few carry values chrono cannot parse. A malformed timestamp
//! must not fail the record (and with it the whole listing it arrived
//! in), so these helpers fall back to `None` / epoch instead of erroring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional timestamp, mapping anything unparseable to
/// `None`.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Deserialize a required timestamp, mapping anything unparseable to
/// epoch.
pub(crate) fn lenient_or_epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or(DateTime::UNIX_EPOCH))
}
