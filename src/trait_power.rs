//! Trait power aggregation.
//!
//! `TraitPowerTable` holds the power contributions of registered traits
//! in parallel arrays — powers and active flags side by side — because
//! `calculate_power` is polled every simulation tick and a flat
//! reduction over two contiguous arrays beats chasing a map of trait
//! objects. The table is append-only: indices handed to callers stay
//! valid forever, and a retired trait is tombstoned by leaving its flag
//! `false`.

use crate::error::StatError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait category, mirroring the content pool's grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Physical,
    Mental,
    Social,
    Special,
}

/// Interned string identifier for traits.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TraitId(Arc<str>);

impl TraitId {
    /// Get the string representation of this `TraitId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitId {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for TraitId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl Borrow<str> for TraitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TraitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TraitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TraitId::from(s))
    }
}

/// Power contributions of registered traits, in parallel arrays.
///
/// # Examples
///
/// ```rust
/// use simstat::TraitPowerTable;
///
/// let mut table = TraitPowerTable::new();
/// let regen = table.register_trait(3.0);
/// let thick_skin = table.register_trait(5.0);
/// let adaptive = table.register_trait(2.0);
///
/// table.set_active(regen, true).unwrap();
/// table.set_active(adaptive, true).unwrap();
/// assert_eq!(table.calculate_power(), 5.0);
///
/// // Tombstone: indices stay valid, the power just stops counting
/// table.set_active(adaptive, false).unwrap();
/// assert_eq!(table.calculate_power(), 3.0);
/// # let _ = thick_skin;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraitPowerTable {
    powers: Vec<f64>,
    active: Vec<bool>,
    categories: Vec<TraitCategory>,
    index: HashMap<TraitId, usize>,
}

impl TraitPowerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an anonymous trait in the `Special` category.
    ///
    /// The trait starts inactive. Returns a stable index that remains
    /// valid for the lifetime of the table.
    pub fn register_trait(&mut self, power: f64) -> usize {
        self.push(TraitCategory::Special, power)
    }

    /// Register a named trait in a category, recording the id → index
    /// mapping for later lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{TraitCategory, TraitPowerTable};
    ///
    /// let mut table = TraitPowerTable::new();
    /// let i = table.register_named("thick_skin", TraitCategory::Physical, 0.8);
    /// assert_eq!(table.index_of("thick_skin"), Some(i));
    /// ```
    pub fn register_named(
        &mut self,
        id: impl Into<TraitId>,
        category: TraitCategory,
        power: f64,
    ) -> usize {
        let i = self.push(category, power);
        self.index.insert(id.into(), i);
        i
    }

    fn push(&mut self, category: TraitCategory, power: f64) -> usize {
        let i = self.powers.len();
        self.powers.push(power);
        self.active.push(false);
        self.categories.push(category);
        i
    }

    /// Look up the index of a named trait.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Flip a trait's active flag. O(1).
    pub fn set_active(&mut self, index: usize, active: bool) -> Result<(), StatError> {
        match self.active.get_mut(index) {
            Some(flag) => {
                *flag = active;
                Ok(())
            }
            None => Err(StatError::IndexOutOfRange {
                index,
                len: self.powers.len(),
            }),
        }
    }

    /// Whether a trait is active, or `None` for an invalid index.
    pub fn is_active(&self, index: usize) -> Option<bool> {
        self.active.get(index).copied()
    }

    /// A trait's power, or `None` for an invalid index.
    pub fn power(&self, index: usize) -> Option<f64> {
        self.powers.get(index).copied()
    }

    /// Total power of all active traits. O(n); 0 for an empty table.
    ///
    /// The hot-path reduction: one pass over two parallel arrays.
    pub fn calculate_power(&self) -> f64 {
        self.powers
            .iter()
            .zip(&self.active)
            .filter(|(_, &active)| active)
            .map(|(power, _)| power)
            .sum()
    }

    /// Total power of active traits in one category.
    pub fn category_power(&self, category: TraitCategory) -> f64 {
        let mut total = 0.0;
        for i in 0..self.powers.len() {
            if self.active[i] && self.categories[i] == category {
                total += self.powers[i];
            }
        }
        total
    }

    /// Number of registered traits, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    /// Whether the table has no registered traits.
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }
}
