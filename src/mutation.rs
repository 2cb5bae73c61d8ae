//! Mutation records.
//!
//! A `MutationRecord` is a named, ordered set of stat effects — the
//! numeric payload of a mutation rolled by the content generator. The
//! applier walks the triples in order and pushes each one through the
//! single-modifier combinator path.

use crate::error::StatError;
use crate::modifier::{Modifier, ModifierKind};
use crate::stats::StatSet;
use serde::{Deserialize, Serialize};

/// One stat effect inside a mutation: `(stat, kind, value)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationEffect {
    /// Target stat name, resolved at apply time.
    pub stat: String,
    /// Modifier kind.
    pub kind: ModifierKind,
    /// Modifier value.
    pub value: f64,
}

/// A named mutation with its ordered stat effects.
///
/// # Examples
///
/// ```rust
/// use simstat::{ModifierKind, MutationRecord, StatSet};
///
/// let mutation = MutationRecord::new("thick_skin", "Thick Skin")
///     .with_effect("resistance.physical", ModifierKind::Add, 15.0)
///     .with_effect("mutation_rate", ModifierKind::Add, 2.0);
///
/// let mut stats = StatSet::new();
/// stats.apply_mutation(&mutation).unwrap();
/// assert_eq!(stats.resistance("physical"), 15.0);
/// assert_eq!(stats.mutation_rate(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stat effects, applied in this order.
    #[serde(default)]
    pub effects: Vec<MutationEffect>,
}

impl MutationRecord {
    /// Create an empty mutation record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effects: Vec::new(),
        }
    }

    /// Append a stat effect.
    pub fn with_effect(mut self, stat: impl Into<String>, kind: ModifierKind, value: f64) -> Self {
        self.effects.push(MutationEffect {
            stat: stat.into(),
            kind,
            value,
        });
        self
    }
}

impl StatSet {
    /// Apply a mutation's effects in order.
    ///
    /// Each triple goes through the combinator path with the target
    /// stat's cap, one stat at a time. Application is best-effort and
    /// sequential: a triple naming an unknown stat is skipped, and a
    /// triple with a non-finite value aborts with
    /// [`StatError::InvalidModifierValue`] — earlier triples stay
    /// applied; there is no rollback.
    pub fn apply_mutation(&mut self, mutation: &MutationRecord) -> Result<(), StatError> {
        for effect in &mutation.effects {
            let modifier = Modifier {
                kind: effect.kind,
                value: effect.value,
                duration: None,
            };
            self.apply_modifier(&effect.stat, &modifier)?;
        }
        tracing::debug!(
            id = %mutation.id,
            name = %mutation.name,
            effects = mutation.effects.len(),
            "applied mutation"
        );
        Ok(())
    }
}
