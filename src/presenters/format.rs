//! Field formatting shared by every presenter row.

use crate::error::RenderError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Display;

/// RFC 3339 in UTC, whole seconds: `2024-01-02T03:04:05Z`.
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn opt_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map(timestamp).unwrap_or_default()
}

pub fn boolean(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

pub fn optional<T: Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Indented JSON for nested structures. Serialization failures abort the render.
pub fn nested<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(value)?)
}
