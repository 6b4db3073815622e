//! Field text parsing policies
//!
//! Two deliberately different policies coexist. Count fields (gems, fates,
//! pull targets, owned materials) parse permissively: anything unreadable
//! or negative collapses to zero and the caller never sees an error. Stat
//! fields (crit rate, crit damage) parse strictly and reject bad text so
//! the UI can surface an inline message instead of silently computing a
//! wrong score.

use crate::error::{Error, Result};

/// Permissive count parsing: unreadable text becomes 0.
///
/// A leading minus sign fails the unsigned parse, so negative text
/// normalizes to 0 as well.
///
/// ```
/// use pullplan_core::permissive_count;
///
/// assert_eq!(permissive_count("42"), 42);
/// assert_eq!(permissive_count(""), 0);
/// assert_eq!(permissive_count("-5"), 0);
/// ```
pub fn permissive_count(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// Strict stat parsing: accepts a comma as the decimal separator, rejects
/// anything non-numeric, non-finite, or negative.
pub fn strict_stat(field: &str, text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| Error::InvalidInput {
        field: field.to_string(),
        text: text.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput {
            field: field.to_string(),
            text: text.to_string(),
        });
    }
    Ok(value)
}
