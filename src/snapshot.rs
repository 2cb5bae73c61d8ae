//! Immutable stat snapshots.
//!
//! `StatSetView` is a deep, decoupled copy of a `StatSet` for the
//! persistence and UI collaborators: read-only, copyable, serializable,
//! comparable. The serialization *format* belongs to those
//! collaborators; this crate only guarantees the view round-trips
//! through serde.

use crate::stat_key::DamageType;
use crate::stats::StatSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// An immutable copy of a `StatSet` at one point in time.
///
/// Fully detached from the live stat set — mutating one never affects
/// the other.
///
/// # Examples
///
/// ```rust
/// use simstat::{Modifier, StatSet};
///
/// let mut stats = StatSet::new();
/// let before = stats.snapshot();
///
/// stats.apply_modifier("hp", &Modifier::add(-30.0)).unwrap();
/// let after = stats.snapshot();
///
/// assert_eq!(before.hp, 100.0);
/// assert_eq!(after.hp, 70.0);
/// assert_ne!(before, after);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSetView {
    /// Hit points at snapshot time.
    pub hp: f64,
    /// Hit point ceiling at snapshot time.
    pub max_hp: f64,
    /// Mutation rate at snapshot time.
    pub mutation_rate: f64,
    /// Resistances at snapshot time.
    pub resistances: HashMap<DamageType, f64>,
    /// Immunities at snapshot time.
    pub immunities: BTreeSet<DamageType>,
    /// Reflection point balance at snapshot time.
    pub reflection_points: i64,
}

impl StatSetView {
    /// Resistance against one damage type (0 when absent).
    pub fn resistance(&self, damage_type: &str) -> f64 {
        self.resistances.get(damage_type).copied().unwrap_or(0.0)
    }
}

impl StatSet {
    /// Produce an immutable copy safe to persist or compare.
    ///
    /// Deep-copies `resistances` and `immunities`; the view shares no
    /// mutable state with the live stat set.
    pub fn snapshot(&self) -> StatSetView {
        StatSetView {
            hp: self.hp,
            max_hp: self.max_hp,
            mutation_rate: self.mutation_rate,
            resistances: self.resistances.clone(),
            immunities: self.immunities.clone(),
            reflection_points: self.reflection_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;

    #[test]
    fn test_snapshot_is_decoupled() {
        let mut stats = StatSet::new();
        stats
            .apply_effect(&Effect::resistance_modifier("fire", 25.0))
            .unwrap();
        let view = stats.snapshot();

        stats
            .apply_effect(&Effect::resistance_modifier("fire", 25.0))
            .unwrap();

        assert_eq!(view.resistance("fire"), 25.0);
        assert_eq!(stats.resistance("fire"), 50.0);
    }

    #[test]
    fn test_snapshot_captures_all_fields() {
        let mut stats = StatSet::new();
        stats
            .apply_effect(&Effect::disaster_immunity("psychic"))
            .unwrap();
        let view = stats.snapshot();

        assert_eq!(view.hp, stats.hp());
        assert_eq!(view.max_hp, stats.max_hp());
        assert_eq!(view.mutation_rate, stats.mutation_rate());
        assert!(view.immunities.contains("psychic"));
        assert_eq!(view.reflection_points, stats.reflection_points());
    }
}
