//! Discrete gameplay effects.
//!
//! An `Effect` is a named, higher-level gameplay event ("take 50% hp
//! damage", "become immune to radiation") that the processor translates
//! into bounded stat updates. Effect kinds form a closed set plus an
//! `Unrecognized` catch-all carrying the raw string for diagnostics —
//! content generators ship new kind strings faster than engines ship
//! dispatch tables.

use crate::error::StatError;
use crate::stat_key::DamageType;
use crate::stats::StatSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Effect kind.
///
/// Serializes as the effect's wire name (`hp_modifier`,
/// `mutation_rate_modifier`, `resistance_modifier`,
/// `disaster_immunity`); any other string deserializes to
/// `Unrecognized`, preserving the original text.
///
/// # Examples
///
/// ```rust
/// use simstat::EffectKind;
///
/// assert_eq!(EffectKind::from("hp_modifier"), EffectKind::HpModifier);
/// assert_eq!(
///     EffectKind::from("solar_flare"),
///     EffectKind::Unrecognized("solar_flare".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Percentage change of current hp.
    HpModifier,
    /// Absolute delta on the mutation rate.
    MutationRateModifier,
    /// Absolute delta on one resistance.
    ResistanceModifier,
    /// Grant of one immunity.
    DisasterImmunity,
    /// Anything else; carries the raw kind string.
    Unrecognized(String),
}

impl EffectKind {
    /// The effect's wire name.
    pub fn as_str(&self) -> &str {
        match self {
            EffectKind::HpModifier => "hp_modifier",
            EffectKind::MutationRateModifier => "mutation_rate_modifier",
            EffectKind::ResistanceModifier => "resistance_modifier",
            EffectKind::DisasterImmunity => "disaster_immunity",
            EffectKind::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for EffectKind {
    fn from(s: &str) -> Self {
        match s {
            "hp_modifier" => EffectKind::HpModifier,
            "mutation_rate_modifier" => EffectKind::MutationRateModifier,
            "resistance_modifier" => EffectKind::ResistanceModifier,
            "disaster_immunity" => EffectKind::DisasterImmunity,
            other => EffectKind::Unrecognized(other.to_string()),
        }
    }
}

impl Serialize for EffectKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EffectKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EffectKind::from(s.as_str()))
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discrete gameplay effect.
///
/// `target` is required for the resistance and immunity kinds and
/// ignored by the others.
///
/// # Examples
///
/// ```rust
/// use simstat::{Effect, StatSet};
///
/// let mut stats = StatSet::new();
///
/// // -50% of current hp
/// stats.apply_effect(&Effect::hp_modifier(-50.0)).unwrap();
/// assert_eq!(stats.hp(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// What the effect does.
    pub kind: EffectKind,
    /// Damage-type key, where the kind requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<DamageType>,
    /// Numeric payload (a percentage for `hp_modifier`, an absolute
    /// delta for the other numeric kinds, unused for immunities).
    pub value: f64,
}

impl Effect {
    /// A percentage change of current hp (`-50.0` halves current hp).
    pub fn hp_modifier(percent: f64) -> Self {
        Self {
            kind: EffectKind::HpModifier,
            target: None,
            value: percent,
        }
    }

    /// An absolute delta on the mutation rate.
    pub fn mutation_rate_modifier(delta: f64) -> Self {
        Self {
            kind: EffectKind::MutationRateModifier,
            target: None,
            value: delta,
        }
    }

    /// An absolute delta on the resistance against `damage_type`.
    pub fn resistance_modifier(damage_type: impl Into<DamageType>, delta: f64) -> Self {
        Self {
            kind: EffectKind::ResistanceModifier,
            target: Some(damage_type.into()),
            value: delta,
        }
    }

    /// An immunity grant for `damage_type`.
    pub fn disaster_immunity(damage_type: impl Into<DamageType>) -> Self {
        Self {
            kind: EffectKind::DisasterImmunity,
            target: Some(damage_type.into()),
            value: 0.0,
        }
    }
}

impl StatSet {
    /// Validate and apply one effect.
    ///
    /// Structural validation happens before any mutation: a missing
    /// `target` on kinds that need one, or a non-finite payload on
    /// numeric kinds, returns [`StatError::InvalidEffect`] with the
    /// stat set untouched. Unrecognized kinds are logged as a warning
    /// and ignored — content may reference effects this engine does not
    /// know yet, and that must not kill the simulation. Real failures
    /// are logged with context and returned, never swallowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{Effect, StatSet};
    ///
    /// let mut stats = StatSet::new();
    ///
    /// stats.apply_effect(&Effect::mutation_rate_modifier(95.0)).unwrap();
    /// stats.apply_effect(&Effect::mutation_rate_modifier(50.0)).unwrap();
    /// assert_eq!(stats.mutation_rate(), 100.0); // capped
    ///
    /// stats.apply_effect(&Effect::disaster_immunity("radiation")).unwrap();
    /// stats.apply_effect(&Effect::disaster_immunity("radiation")).unwrap();
    /// assert_eq!(stats.immunities().len(), 1); // idempotent
    /// ```
    pub fn apply_effect(&mut self, effect: &Effect) -> Result<(), StatError> {
        match self.dispatch_effect(effect) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(kind = %effect.kind, %err, "effect application failed");
                Err(err)
            }
        }
    }

    fn dispatch_effect(&mut self, effect: &Effect) -> Result<(), StatError> {
        match (&effect.kind, effect.target.as_ref()) {
            (EffectKind::HpModifier, _) => {
                let percent = finite_payload(effect)?;
                let delta = self.hp * (percent / 100.0);
                self.hp = (self.hp + delta).clamp(0.0, self.max_hp);
                Ok(())
            }
            (EffectKind::MutationRateModifier, _) => {
                let delta = finite_payload(effect)?;
                self.mutation_rate =
                    (self.mutation_rate + delta).clamp(0.0, self.caps.mutation_rate);
                Ok(())
            }
            (EffectKind::ResistanceModifier, Some(target)) => {
                let delta = finite_payload(effect)?;
                let cap = self.caps.resistance;
                let entry = self.resistances.entry(target.clone()).or_insert(0.0);
                *entry = (*entry + delta).clamp(0.0, cap);
                Ok(())
            }
            (EffectKind::DisasterImmunity, Some(target)) => {
                self.immunities.insert(target.clone());
                Ok(())
            }
            (EffectKind::ResistanceModifier, None) | (EffectKind::DisasterImmunity, None) => {
                Err(StatError::InvalidEffect {
                    reason: format!("{} requires a target damage type", effect.kind),
                })
            }
            (EffectKind::Unrecognized(raw), _) => {
                tracing::warn!(kind = %raw, "ignoring unrecognized effect kind");
                Ok(())
            }
        }
    }
}

fn finite_payload(effect: &Effect) -> Result<f64, StatError> {
    if effect.value.is_finite() {
        Ok(effect.value)
    } else {
        Err(StatError::InvalidEffect {
            reason: format!("{} value must be finite, got {}", effect.kind, effect.value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_modifier_is_percentage_of_current() {
        let mut stats = StatSet::from_config(crate::StatSetConfig {
            base_hp: 100.0,
            max_hp: 150.0,
            ..Default::default()
        });
        stats.apply_effect(&Effect::hp_modifier(-50.0)).unwrap();
        assert_eq!(stats.hp(), 50.0);
    }

    #[test]
    fn test_hp_modifier_clamps_to_max_hp() {
        let mut stats = StatSet::new();
        stats.apply_effect(&Effect::hp_modifier(80.0)).unwrap();
        assert_eq!(stats.hp(), 100.0); // 180 clamped to max_hp
    }

    #[test]
    fn test_hp_modifier_clamps_to_zero() {
        let mut stats = StatSet::new();
        stats.apply_effect(&Effect::hp_modifier(-150.0)).unwrap();
        assert_eq!(stats.hp(), 0.0);
    }

    #[test]
    fn test_mutation_rate_floor() {
        let mut stats = StatSet::new();
        stats
            .apply_effect(&Effect::mutation_rate_modifier(-10.0))
            .unwrap();
        assert_eq!(stats.mutation_rate(), 0.0);
    }

    #[test]
    fn test_resistance_defaults_to_zero() {
        let mut stats = StatSet::new();
        stats
            .apply_effect(&Effect::resistance_modifier("biological", 40.0))
            .unwrap();
        assert_eq!(stats.resistance("biological"), 40.0);
    }

    #[test]
    fn test_missing_target_does_not_mutate() {
        let mut stats = StatSet::new();
        let before = stats.clone();

        let mut effect = Effect::resistance_modifier("fire", 40.0);
        effect.target = None;

        let err = stats.apply_effect(&effect).unwrap_err();
        assert!(matches!(err, StatError::InvalidEffect { .. }));
        assert_eq!(stats, before);
    }

    #[test]
    fn test_non_finite_payload_does_not_mutate() {
        let mut stats = StatSet::new();
        let before = stats.clone();

        let err = stats
            .apply_effect(&Effect::hp_modifier(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, StatError::InvalidEffect { .. }));
        assert_eq!(stats, before);
    }

    #[test]
    fn test_unrecognized_kind_is_ignored() {
        let mut stats = StatSet::new();
        let before = stats.clone();

        let effect = Effect {
            kind: EffectKind::from("solar_flare"),
            target: None,
            value: 12.0,
        };
        stats.apply_effect(&effect).unwrap();
        assert_eq!(stats, before);
    }

    #[test]
    fn test_kind_wire_names_round_trip() {
        for name in [
            "hp_modifier",
            "mutation_rate_modifier",
            "resistance_modifier",
            "disaster_immunity",
            "something_else",
        ] {
            assert_eq!(EffectKind::from(name).as_str(), name);
        }
    }
}
