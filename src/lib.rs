//! # simstat - Deterministic Stat Engine for Survival Sims
//!
//! The stat-modification and aggregation core of a survival simulation:
//! - **Deterministic** combination (same modifiers, same order → same value)
//! - **Bounded** stats (per-stat caps consulted after every combination)
//! - **One algorithm** for single, batch, and vectorized application
//! - **Permissive** targeting (unknown stat names skip, they don't throw)
//!
//! ## Core Concepts
//!
//! ### Modification Pipeline
//!
//! All mutation flows through one pipeline:
//!
//! ```text
//! [Effect | Modifier | MutationRecord] → [combine] → [StatSet]
//! ```
//!
//! 1. **Effects** are named gameplay events (percentage hp damage,
//!    immunity grants) dispatched onto the stat set
//! 2. **Modifiers** are raw add/multiply/set operations, applied singly
//!    or batched per stat
//! 3. **MutationRecords** are ordered effect triples from the content
//!    generator, replayed through the same combinator
//!
//! Independently, a [`TraitPowerTable`] aggregates the power of active
//! traits in parallel arrays — the hot path polled every simulation
//! tick.
//!
//! ### Key Guarantees
//!
//! - **Caps**: a stat with a cap never exceeds it, no matter how
//!   modifiers arrive
//! - **Set wins**: the last `Set` in a collection overrides adds and
//!   multiplies
//! - **Scalar/vectorized equivalence**: both batch paths produce
//!   bit-for-bit identical stat sets
//! - **Validation before mutation**: invalid input never leaves a
//!   half-written stat set
//!
//! ## Example
//!
//! ```rust
//! use simstat::{Effect, Modifier, StatSet};
//!
//! let mut stats = StatSet::new();
//!
//! // A disaster hits: -50% of current hp
//! stats.apply_effect(&Effect::hp_modifier(-50.0)).unwrap();
//! assert_eq!(stats.hp(), 50.0);
//!
//! // A mutation batch: grouped per stat, combined deterministically
//! let batch = vec![
//!     ("mutation_rate".to_string(), Modifier::add(30.0)),
//!     ("mutation_rate".to_string(), Modifier::multiply(2.0)),
//! ];
//! stats.apply_batch(&batch).unwrap();
//! assert_eq!(stats.mutation_rate(), 60.0); // (0 + 30) * 2
//! ```
//!
//! ## Modules
//!
//! - [`stats`] - The canonical stat record
//! - [`modifier`] - Modifiers and the combination algorithm
//! - [`effect`] - Discrete gameplay effects
//! - [`batch`] - Batched application (scalar and vectorized)
//! - [`mutation`] - Mutation records
//! - [`trait_power`] - Trait power aggregation
//! - [`stat_key`] - Stat addressing
//! - [`config`] - Caps and starting-state configuration
//! - [`snapshot`] - Immutable views for persistence/UI
//! - [`error`] - Error types

pub mod batch;
pub mod config;
pub mod effect;
pub mod error;
pub mod modifier;
pub mod mutation;
pub mod snapshot;
pub mod stat_key;
pub mod stats;
pub mod trait_power;

// Re-export main types for convenience
pub use config::{StatCaps, StatSetConfig};
pub use error::StatError;
pub use snapshot::StatSetView;
pub use stat_key::{DamageType, StatKey};
pub use stats::StatSet;

// Re-export the modification vocabulary
pub use batch::BatchEntry;
pub use effect::{Effect, EffectKind};
pub use modifier::{combine, combine_vectorized, Modifier, ModifierKind};
pub use mutation::{MutationEffect, MutationRecord};

// Re-export trait aggregation types
pub use trait_power::{TraitCategory, TraitId, TraitPowerTable};
