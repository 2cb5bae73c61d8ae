//! The canonical player stat record.
//!
//! `StatSet` is the long-lived, in-memory record of one player's
//! statistics. It is pure data plus invariant enforcement; every capped
//! mutation flows through the combination algorithm in
//! [`crate::modifier`] or the effect dispatch in [`crate::effect`].

use crate::config::{StatCaps, StatSetConfig};
use crate::error::StatError;
use crate::modifier::{self, Modifier};
use crate::stat_key::{DamageType, StatKey};
use std::collections::{BTreeSet, HashMap};

/// A player's statistics.
///
/// Owned exclusively by the caller holding the player's state; all
/// operations take `&mut self`, which is the crate's whole concurrency
/// story — one owner, one writer.
///
/// # Examples
///
/// ```rust
/// use simstat::{Modifier, StatSet};
///
/// let mut stats = StatSet::new();
/// assert_eq!(stats.hp(), 100.0);
///
/// let applied = stats.apply_modifier("hp", &Modifier::add(10.0)).unwrap();
/// assert!(applied);
/// assert_eq!(stats.hp(), 110.0);
///
/// // Unknown stats are reported, not raised
/// let applied = stats.apply_modifier("stamina", &Modifier::add(10.0)).unwrap();
/// assert!(!applied);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatSet {
    pub(crate) hp: f64,
    pub(crate) max_hp: f64,
    pub(crate) mutation_rate: f64,
    pub(crate) resistances: HashMap<DamageType, f64>,
    pub(crate) immunities: BTreeSet<DamageType>,
    pub(crate) reflection_points: i64,
    pub(crate) caps: StatCaps,
}

impl StatSet {
    /// Create a stat set with default starting values (hp 100/100,
    /// mutation rate 0, no resistances or immunities, default caps).
    pub fn new() -> Self {
        Self::from_config(StatSetConfig::default())
    }

    /// Create a stat set from a configuration.
    ///
    /// Starting resistances are clamped into `[0, caps.resistance]` so a
    /// hand-written config cannot begin outside the invariants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{StatSet, StatSetConfig};
    ///
    /// let mut config = StatSetConfig::default();
    /// config.resistances.insert("radiation".into(), 250.0);
    /// config.immunities.push("chemical".into());
    ///
    /// let stats = StatSet::from_config(config);
    /// assert_eq!(stats.resistance("radiation"), 100.0); // clamped
    /// assert!(stats.is_immune("chemical"));
    /// ```
    pub fn from_config(config: StatSetConfig) -> Self {
        let caps = config.caps;
        let resistances = config
            .resistances
            .into_iter()
            .map(|(damage_type, value)| (damage_type, value.clamp(0.0, caps.resistance)))
            .collect();
        let mut stats = Self {
            hp: config.base_hp,
            max_hp: config.max_hp,
            mutation_rate: config.mutation_rate.clamp(0.0, caps.mutation_rate),
            resistances,
            immunities: config.immunities.into_iter().collect(),
            reflection_points: config.reflection_points,
            caps,
        };
        stats.validate();
        stats
    }

    /// Current hit points.
    pub fn hp(&self) -> f64 {
        self.hp
    }

    /// Hit point ceiling.
    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    /// Current mutation rate.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Reflection point balance.
    pub fn reflection_points(&self) -> i64 {
        self.reflection_points
    }

    /// All resistances, keyed by damage type.
    pub fn resistances(&self) -> &HashMap<DamageType, f64> {
        &self.resistances
    }

    /// Resistance against one damage type (0 when absent).
    pub fn resistance(&self, damage_type: &str) -> f64 {
        self.resistances.get(damage_type).copied().unwrap_or(0.0)
    }

    /// All granted immunities.
    pub fn immunities(&self) -> &BTreeSet<DamageType> {
        &self.immunities
    }

    /// Whether an immunity has been granted for a damage type.
    pub fn is_immune(&self, damage_type: &str) -> bool {
        self.immunities.contains(damage_type)
    }

    /// The cap table this stat set was built with.
    pub fn caps(&self) -> StatCaps {
        self.caps
    }

    /// Restore the hp invariant: clamp `hp` into `[0, max_hp]`.
    ///
    /// This is an invariant-restoring operation, not a check — it never
    /// fails and is idempotent, so it can be called at any point (the
    /// modifier paths deliberately do not enforce the lower bound or the
    /// `max_hp` ceiling themselves).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{Modifier, StatSet};
    ///
    /// let mut stats = StatSet::new();
    /// stats.apply_modifier("hp", &Modifier::add(-500.0)).unwrap();
    /// assert_eq!(stats.hp(), -400.0);
    ///
    /// stats.validate();
    /// assert_eq!(stats.hp(), 0.0);
    /// ```
    pub fn validate(&mut self) {
        self.hp = self.hp.clamp(0.0, self.max_hp);
    }

    /// Strictly read a stat by name.
    ///
    /// Unlike the apply paths, which treat an unknown name as a skip,
    /// this returns [`StatError::UnknownStat`] — for callers that want
    /// to pre-validate stat names before building a batch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{StatError, StatSet};
    ///
    /// let stats = StatSet::new();
    /// assert_eq!(stats.value_of("hp").unwrap(), 100.0);
    /// assert_eq!(
    ///     stats.value_of("stamina"),
    ///     Err(StatError::UnknownStat("stamina".to_string()))
    /// );
    /// ```
    pub fn value_of(&self, stat: &str) -> Result<f64, StatError> {
        match StatKey::parse(stat) {
            Some(key) => Ok(self.get(&key)),
            None => Err(StatError::UnknownStat(stat.to_string())),
        }
    }

    /// Read the current value of a resolved stat.
    pub fn get(&self, key: &StatKey) -> f64 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::MaxHp => self.max_hp,
            StatKey::MutationRate => self.mutation_rate,
            StatKey::ReflectionPoints => self.reflection_points as f64,
            StatKey::Resistance(damage_type) => self.resistance(damage_type.as_str()),
        }
    }

    /// Write a combined value back to a resolved stat.
    ///
    /// `reflection_points` is an integer stat; the write rounds half
    /// away from zero.
    pub(crate) fn set(&mut self, key: &StatKey, value: f64) {
        match key {
            StatKey::Hp => self.hp = value,
            StatKey::MaxHp => self.max_hp = value,
            StatKey::MutationRate => self.mutation_rate = value,
            StatKey::ReflectionPoints => self.reflection_points = value.round() as i64,
            StatKey::Resistance(damage_type) => {
                self.resistances.insert(damage_type.clone(), value);
            }
        }
    }

    /// Apply one modifier to one stat by name.
    ///
    /// Returns `Ok(true)` when the stat existed and was updated,
    /// `Ok(false)` when the name resolves to no stat (nothing happens),
    /// and `Err` for a non-finite modifier value. The new value is
    /// capped per the stat's entry in [`StatCaps`]; no lower clamp is
    /// applied (see [`StatSet::validate`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{Modifier, StatSet};
    ///
    /// let mut stats = StatSet::new();
    /// stats.apply_modifier("mutation_rate", &Modifier::add(95.0)).unwrap();
    /// stats.apply_modifier("mutation_rate", &Modifier::add(50.0)).unwrap();
    /// assert_eq!(stats.mutation_rate(), 100.0); // capped, not 145
    /// ```
    pub fn apply_modifier(&mut self, stat: &str, modifier: &Modifier) -> Result<bool, StatError> {
        let Some(key) = StatKey::parse(stat) else {
            tracing::debug!(stat, "skipping modifier for unknown stat");
            return Ok(false);
        };
        let current = self.get(&key);
        let cap = self.caps.cap_for(&key);
        let next = modifier::combine(current, cap, std::slice::from_ref(modifier))?;
        self.set(&key, next);
        Ok(true)
    }
}

impl Default for StatSet {
    fn default() -> Self {
        Self::new()
    }
}
