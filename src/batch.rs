//! Batched modifier application.
//!
//! A batch is an ordered sequence of `(stat_name, Modifier)` entries
//! targeting possibly many stats. Entries are grouped by exact stat-name
//! match (intra-group order preserved), each group is folded through the
//! combination algorithm once, and the result is written back. Unknown
//! stat names are skipped without error — callers wanting strict
//! validation should pre-validate with [`StatKey::parse`].
//!
//! The vectorized path is a performance variant of the same contract:
//! for any input it produces bit-for-bit the same `StatSet` as the
//! scalar path.

use crate::error::StatError;
use crate::modifier::{self, Modifier};
use crate::stat_key::StatKey;
use crate::stats::StatSet;
use std::collections::HashMap;

/// One batch entry: a stat name and the modifier to apply to it.
pub type BatchEntry = (String, Modifier);

type CombineFn = fn(f64, f64, &[Modifier]) -> Result<f64, StatError>;

impl StatSet {
    /// Apply a batch of modifiers, scalar path.
    ///
    /// Every modifier value is validated finite *before* the first
    /// write, so a rejected batch mutates nothing. Entries whose stat
    /// name resolves to no stat are skipped silently (per-entry
    /// best-effort); same-stat entries combine in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simstat::{Modifier, StatSet};
    ///
    /// let mut stats = StatSet::new();
    /// let batch = vec![
    ///     ("mutation_rate".to_string(), Modifier::add(30.0)),
    ///     ("nonexistent_stat".to_string(), Modifier::add(5.0)),
    ///     ("mutation_rate".to_string(), Modifier::multiply(2.0)),
    /// ];
    ///
    /// stats.apply_batch(&batch).unwrap();
    /// assert_eq!(stats.mutation_rate(), 60.0); // (0 + 30) * 2, unknown skipped
    /// ```
    pub fn apply_batch(&mut self, entries: &[BatchEntry]) -> Result<(), StatError> {
        self.apply_batch_with(entries, modifier::combine)
    }

    /// Apply a batch of modifiers, vectorized path.
    ///
    /// Identical contract and results to [`StatSet::apply_batch`]; the
    /// per-group fold partitions values into contiguous buffers and
    /// reduces them (see [`modifier::combine_vectorized`]). Pick one
    /// path per logical update; never mix them within one.
    pub fn apply_batch_vectorized(&mut self, entries: &[BatchEntry]) -> Result<(), StatError> {
        self.apply_batch_with(entries, modifier::combine_vectorized)
    }

    fn apply_batch_with(
        &mut self,
        entries: &[BatchEntry],
        combine: CombineFn,
    ) -> Result<(), StatError> {
        // Reject before the first write: a batch with a bad value must
        // leave the stat set untouched.
        for (_, modifier) in entries {
            if !modifier.value.is_finite() {
                return Err(StatError::InvalidModifierValue {
                    value: modifier.value,
                });
            }
        }

        for (stat, modifiers) in group_by_stat(entries) {
            match StatKey::parse(stat) {
                Some(key) => {
                    let current = self.get(&key);
                    let cap = self.caps().cap_for(&key);
                    let next = combine(current, cap, &modifiers)?;
                    self.set(&key, next);
                }
                None => {
                    tracing::debug!(stat, entries = modifiers.len(), "skipping unknown stat in batch");
                }
            }
        }
        Ok(())
    }
}

/// Group entries by stat name, preserving intra-group order and
/// first-seen group order.
fn group_by_stat(entries: &[BatchEntry]) -> Vec<(&str, Vec<Modifier>)> {
    let mut groups: Vec<(&str, Vec<Modifier>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (stat, modifier) in entries {
        match index.get(stat.as_str()) {
            Some(&i) => groups[i].1.push(*modifier),
            None => {
                index.insert(stat.as_str(), groups.len());
                groups.push((stat.as_str(), vec![*modifier]));
            }
        }
    }
    groups
}
