//! Configuration types.
//!
//! `StatCaps` is the per-stat upper-bound table consulted by every
//! capping computation, and `StatSetConfig` describes the starting state
//! of a `StatSet`. Both are plain, serializable data: fixed at
//! construction, never mutated at runtime, no global state.

use crate::stat_key::{DamageType, StatKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bounds per stat, consulted after every combination.
///
/// A stat without an entry in this table is uncapped — `cap_for`
/// reports `+∞` for it. The table is carried by value inside each
/// `StatSet` and there is no way to change it after construction.
///
/// # Examples
///
/// ```rust
/// use simstat::{StatCaps, StatKey};
///
/// let caps = StatCaps::default();
/// assert_eq!(caps.cap_for(&StatKey::Hp), 1000.0);
/// assert_eq!(caps.cap_for(&StatKey::MutationRate), 100.0);
/// assert_eq!(caps.cap_for(&StatKey::ReflectionPoints), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatCaps {
    /// Cap for `hp`.
    pub hp: f64,
    /// Cap for `mutation_rate`.
    pub mutation_rate: f64,
    /// Cap shared by every `resistance.<damage_type>` entry.
    pub resistance: f64,
}

impl Default for StatCaps {
    fn default() -> Self {
        Self {
            hp: 1000.0,
            mutation_rate: 100.0,
            resistance: 100.0,
        }
    }
}

impl StatCaps {
    /// Look up the cap for a stat key.
    ///
    /// Stats absent from the table are uncapped.
    pub fn cap_for(&self, key: &StatKey) -> f64 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::MutationRate => self.mutation_rate,
            StatKey::Resistance(_) => self.resistance,
            StatKey::MaxHp | StatKey::ReflectionPoints => f64::INFINITY,
        }
    }
}

/// Starting state for a `StatSet`.
///
/// Every field has a sensible default, so partial configs deserialize
/// cleanly and `StatSetConfig::default()` matches `StatSet::new()`.
///
/// # Examples
///
/// ```rust
/// use simstat::{StatSet, StatSetConfig};
///
/// let config = StatSetConfig {
///     base_hp: 80.0,
///     max_hp: 120.0,
///     ..StatSetConfig::default()
/// };
/// let stats = StatSet::from_config(config);
/// assert_eq!(stats.hp(), 80.0);
/// assert_eq!(stats.max_hp(), 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSetConfig {
    /// Starting hp.
    pub base_hp: f64,
    /// Starting hp ceiling.
    pub max_hp: f64,
    /// Starting mutation rate.
    pub mutation_rate: f64,
    /// Starting resistances, keyed by damage type.
    pub resistances: HashMap<DamageType, f64>,
    /// Starting immunities.
    pub immunities: Vec<DamageType>,
    /// Starting reflection point balance.
    pub reflection_points: i64,
    /// Cap table for the resulting `StatSet`.
    pub caps: StatCaps,
}

impl Default for StatSetConfig {
    fn default() -> Self {
        Self {
            base_hp: 100.0,
            max_hp: 100.0,
            mutation_rate: 0.0,
            resistances: HashMap::new(),
            immunities: Vec::new(),
            reflection_points: 0,
            caps: StatCaps::default(),
        }
    }
}
