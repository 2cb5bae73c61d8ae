//! Stat addressing module.
//!
//! Provides `DamageType`, an interned string identifier for damage-type
//! keys (resistances and immunities), and `StatKey`, the closed set of
//! stats a modifier can target. Callers address stats by name; `StatKey`
//! is the result of resolving such a name, so an unknown name is an
//! `Option::None` rather than a probe into object attributes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::sync::Arc;

/// Interned string identifier for damage types.
///
/// Uses `Arc<str>` for memory efficiency and fast comparison. Multiple
/// `DamageType` instances with the same string content share the same
/// underlying allocation once cloned from each other.
///
/// # Examples
///
/// ```rust
/// use simstat::DamageType;
///
/// let fire = DamageType::new("fire");
///
/// // Can be created from string slices or owned strings
/// let fire2: DamageType = "fire".into();
/// let fire3: DamageType = String::from("fire").into();
///
/// assert_eq!(fire, fire2);
/// assert_eq!(fire, fire3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DamageType(Arc<str>);

impl DamageType {
    /// Create a new `DamageType` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::DamageType;
    ///
    /// let radiation = DamageType::new("radiation");
    /// assert_eq!(radiation.as_str(), "radiation");
    /// ```
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `DamageType`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for DamageType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DamageType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DamageType::from(s))
    }
}

impl From<&str> for DamageType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DamageType {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

// Lets `HashMap<DamageType, _>` and `BTreeSet<DamageType>` be probed
// with a plain `&str`.
impl Borrow<str> for DamageType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved stat target.
///
/// The set of stats is closed: every addressable stat is a variant here,
/// and resolving a stat name either yields a `StatKey` or `None`. This
/// is what makes "unknown stat → non-fatal skip" cheap and explicit for
/// the batch paths.
///
/// Resistances are addressed as `resistance.<damage_type>`, e.g.
/// `resistance.fire`.
///
/// # Examples
///
/// ```rust
/// use simstat::StatKey;
///
/// assert_eq!(StatKey::parse("hp"), Some(StatKey::Hp));
/// assert_eq!(StatKey::parse("mutation_rate"), Some(StatKey::MutationRate));
/// assert_eq!(
///     StatKey::parse("resistance.fire"),
///     Some(StatKey::Resistance("fire".into()))
/// );
/// assert_eq!(StatKey::parse("charisma"), None);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum StatKey {
    /// Current hit points.
    Hp,
    /// Hit point ceiling for the hp invariant.
    MaxHp,
    /// Mutation rate percentage.
    MutationRate,
    /// Reflection point balance.
    ReflectionPoints,
    /// Resistance against one damage type.
    Resistance(DamageType),
}

impl StatKey {
    /// Resolve a stat name to a key.
    ///
    /// Returns `None` for names that do not address any stat. A bare
    /// `"resistance"` with no damage-type suffix is not a stat.
    pub fn parse(name: &str) -> Option<StatKey> {
        match name {
            "hp" => Some(StatKey::Hp),
            "max_hp" => Some(StatKey::MaxHp),
            "mutation_rate" => Some(StatKey::MutationRate),
            "reflection_points" => Some(StatKey::ReflectionPoints),
            _ => match name.strip_prefix("resistance.") {
                Some(damage_type) if !damage_type.is_empty() => {
                    Some(StatKey::Resistance(DamageType::new(damage_type)))
                }
                _ => None,
            },
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatKey::Hp => write!(f, "hp"),
            StatKey::MaxHp => write!(f, "max_hp"),
            StatKey::MutationRate => write!(f, "mutation_rate"),
            StatKey::ReflectionPoints => write!(f, "reflection_points"),
            StatKey::Resistance(damage_type) => write!(f, "resistance.{}", damage_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_interning() {
        let a = DamageType::new("chemical");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.as_str(), "chemical");
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(StatKey::parse("hp"), Some(StatKey::Hp));
        assert_eq!(StatKey::parse("max_hp"), Some(StatKey::MaxHp));
        assert_eq!(StatKey::parse("mutation_rate"), Some(StatKey::MutationRate));
        assert_eq!(
            StatKey::parse("reflection_points"),
            Some(StatKey::ReflectionPoints)
        );
    }

    #[test]
    fn test_parse_resistance() {
        assert_eq!(
            StatKey::parse("resistance.psychic"),
            Some(StatKey::Resistance(DamageType::new("psychic")))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(StatKey::parse("charisma"), None);
        assert_eq!(StatKey::parse("resistance"), None);
        assert_eq!(StatKey::parse("resistance."), None);
        assert_eq!(StatKey::parse("HP"), None); // names are exact-match
    }

    #[test]
    fn test_display_round_trip() {
        for name in ["hp", "max_hp", "mutation_rate", "resistance.fire"] {
            let key = StatKey::parse(name).unwrap();
            assert_eq!(key.to_string(), name);
        }
    }
}
