//! Error types for stat modification.
//!
//! All failures that can occur while applying modifiers, effects, or
//! trait-table operations are represented by the `StatError` enum.

use thiserror::Error;

/// Errors that can occur during stat modification.
///
/// # Examples
///
/// ```rust
/// use simstat::StatError;
///
/// let err = StatError::UnknownStat("stamina".to_string());
/// println!("{}", err); // "unknown stat: stamina"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatError {
    /// The target stat does not exist on the `StatSet`.
    ///
    /// The single-modifier path reports this as `Ok(false)` instead;
    /// batch and mutation paths skip the offending entries. The error
    /// form is surfaced where a caller asked for strict resolution.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A modifier carried a non-finite (`NaN` or infinite) value.
    ///
    /// Rejected before any mutation — a non-finite value must never
    /// reach the stored state.
    #[error("invalid modifier value: {value} (modifier values must be finite)")]
    InvalidModifierValue { value: f64 },

    /// An effect failed structural validation.
    ///
    /// Covers a missing `target` on kinds that require one, and
    /// non-finite numeric payloads. The `StatSet` is untouched when
    /// this is returned.
    #[error("invalid effect: {reason}")]
    InvalidEffect { reason: String },

    /// A trait-table index was out of range.
    ///
    /// Indices are handed out by `register_trait` and stay valid for
    /// the lifetime of the table; seeing this error means the caller
    /// mixed up handles from different tables.
    #[error("trait index {index} out of range (table has {len} traits)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatError::UnknownStat("stamina".to_string());
        assert!(err.to_string().contains("stamina"));
    }

    #[test]
    fn test_invalid_modifier_display() {
        let err = StatError::InvalidModifierValue { value: f64::NAN };
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = StatError::IndexOutOfRange { index: 7, len: 3 };
        let display = err.to_string();
        assert!(display.contains('7'));
        assert!(display.contains('3'));
    }
}
