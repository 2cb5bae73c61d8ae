//! Modifiers and the combination algorithm.
//!
//! A `Modifier` is a single add/multiply/set operation against one stat.
//! `combine` folds an ordered collection of modifiers into a new value;
//! it is the *only* combination algorithm in the crate — the single,
//! batch, and vectorized paths all go through it (or its bit-identical
//! buffer variant `combine_vectorized`), so there is exactly one numeric
//! semantics no matter how modifiers arrive.

use crate::error::StatError;
use serde::{Deserialize, Serialize};

/// Modifier operation kind.
///
/// Kinds stack by a fixed rule: all `Add` values are summed, all
/// `Multiply` values are multiplied, and a `Set` overrides everything —
/// when several `Set`s appear in one collection, the last one in input
/// order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Add the value to the current stat.
    Add,
    /// Multiply the current stat by the value.
    Multiply,
    /// Replace the current stat with the value.
    Set,
}

/// A single stat modification.
///
/// Modifiers are ephemeral: built by a caller, consumed by exactly one
/// apply call, then discarded. The optional `duration` is advisory
/// metadata for a host's tick-based expiry bookkeeping; this crate never
/// interprets or expires it.
///
/// # Examples
///
/// ```rust
/// use simstat::{Modifier, ModifierKind};
///
/// let flat = Modifier::add(25.0);
/// assert_eq!(flat.kind, ModifierKind::Add);
///
/// // A x1.5 boost that a host may expire after 10 ticks
/// let boost = Modifier::multiply(1.5).lasting(10);
/// assert_eq!(boost.duration, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    /// The operation to perform.
    pub kind: ModifierKind,
    /// The operand.
    pub value: f64,
    /// Advisory lifetime in host ticks. `None` means permanent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Modifier {
    /// Create a flat additive modifier (negative values are penalties).
    pub fn add(value: f64) -> Self {
        Self {
            kind: ModifierKind::Add,
            value,
            duration: None,
        }
    }

    /// Create a multiplicative modifier (e.g. `1.5` for +50%).
    pub fn multiply(value: f64) -> Self {
        Self {
            kind: ModifierKind::Multiply,
            value,
            duration: None,
        }
    }

    /// Create an override modifier that replaces the stat outright.
    pub fn set(value: f64) -> Self {
        Self {
            kind: ModifierKind::Set,
            value,
            duration: None,
        }
    }

    /// Attach an advisory duration in host ticks.
    pub fn lasting(mut self, ticks: u32) -> Self {
        self.duration = Some(ticks);
        self
    }
}

/// Fold an ordered collection of modifiers into a new stat value.
///
/// The algorithm, in fixed order:
///
/// 1. sum all `Add` values (`0` if none);
/// 2. multiply all `Multiply` values (`1` if none);
/// 3. combined = `(current + sum_add) * product_multiply`;
/// 4. if any `Set` is present, the last one in input order replaces the
///    combined value entirely;
/// 5. result = `min(combined, cap)` — no lower clamp; lower bounds are
///    domain decisions left to the caller (see `StatSet::validate`).
///
/// Any non-finite modifier value is rejected with
/// [`StatError::InvalidModifierValue`] before a result is produced.
///
/// # Examples
///
/// ```rust
/// use simstat::{combine, Modifier};
///
/// let mods = [Modifier::add(20.0), Modifier::multiply(2.0)];
/// let value = combine(100.0, f64::INFINITY, &mods).unwrap();
/// assert_eq!(value, 240.0); // (100 + 20) * 2
///
/// // Set wins over Add, and the cap still applies
/// let mods = [Modifier::add(20.0), Modifier::set(50.0)];
/// assert_eq!(combine(100.0, 40.0, &mods).unwrap(), 40.0);
/// ```
pub fn combine(current: f64, cap: f64, modifiers: &[Modifier]) -> Result<f64, StatError> {
    let mut sum_add = 0.0;
    let mut product_multiply = 1.0;
    let mut last_set = None;

    for modifier in modifiers {
        if !modifier.value.is_finite() {
            return Err(StatError::InvalidModifierValue {
                value: modifier.value,
            });
        }
        match modifier.kind {
            ModifierKind::Add => sum_add += modifier.value,
            ModifierKind::Multiply => product_multiply *= modifier.value,
            ModifierKind::Set => last_set = Some(modifier.value),
        }
    }

    let combined = match last_set {
        Some(value) => value,
        None => (current + sum_add) * product_multiply,
    };
    Ok(combined.min(cap))
}

/// Buffer-partitioned variant of [`combine`].
///
/// Partitions the values by kind into contiguous buffers and reduces
/// each buffer in one pass. The reductions run in the same sequential
/// fold order as `combine`, so for any input the two functions return
/// bit-for-bit identical results — this is a performance variant of the
/// same contract, not a second algorithm.
///
/// # Examples
///
/// ```rust
/// use simstat::{combine, combine_vectorized, Modifier};
///
/// let mods = [
///     Modifier::add(3.5),
///     Modifier::multiply(1.25),
///     Modifier::add(-0.5),
///     Modifier::multiply(0.8),
/// ];
/// let scalar = combine(10.0, 100.0, &mods).unwrap();
/// let vectorized = combine_vectorized(10.0, 100.0, &mods).unwrap();
/// assert_eq!(scalar.to_bits(), vectorized.to_bits());
/// ```
pub fn combine_vectorized(
    current: f64,
    cap: f64,
    modifiers: &[Modifier],
) -> Result<f64, StatError> {
    for modifier in modifiers {
        if !modifier.value.is_finite() {
            return Err(StatError::InvalidModifierValue {
                value: modifier.value,
            });
        }
    }

    let mut adds = Vec::with_capacity(modifiers.len());
    let mut multiplies = Vec::with_capacity(modifiers.len());
    let mut last_set = None;
    for modifier in modifiers {
        match modifier.kind {
            ModifierKind::Add => adds.push(modifier.value),
            ModifierKind::Multiply => multiplies.push(modifier.value),
            ModifierKind::Set => last_set = Some(modifier.value),
        }
    }

    // Branch-free reductions over contiguous buffers, in the same fold
    // order as the scalar loop.
    let sum_add: f64 = adds.iter().sum();
    let product_multiply: f64 = multiplies.iter().product();

    let combined = match last_set {
        Some(value) => value,
        None => (current + sum_add) * product_multiply,
    };
    Ok(combined.min(cap))
}
