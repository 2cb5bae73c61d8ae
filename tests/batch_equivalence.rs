//! Property tests for the scalar/vectorized equivalence guarantee and
//! the cap invariant.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use simstat::{combine, combine_vectorized, Modifier, StatSet};

fn modifier_strategy() -> impl Strategy<Value = Modifier> {
    prop_oneof![
        4 => (-100.0f64..100.0).prop_map(Modifier::add),
        4 => (0.1f64..2.0).prop_map(Modifier::multiply),
        1 => (-50.0f64..1200.0).prop_map(Modifier::set),
    ]
}

fn entry_strategy() -> impl Strategy<Value = (String, Modifier)> {
    let stat = prop_oneof![
        Just("hp".to_string()),
        Just("max_hp".to_string()),
        Just("mutation_rate".to_string()),
        Just("reflection_points".to_string()),
        Just("resistance.fire".to_string()),
        Just("resistance.radiation".to_string()),
        Just("unknown_stat".to_string()),
    ];
    (stat, modifier_strategy())
}

/// Bit-level equality across every field the batch paths can touch.
fn assert_bitwise_equal(a: &StatSet, b: &StatSet) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.hp().to_bits(), b.hp().to_bits());
    prop_assert_eq!(a.max_hp().to_bits(), b.max_hp().to_bits());
    prop_assert_eq!(a.mutation_rate().to_bits(), b.mutation_rate().to_bits());
    prop_assert_eq!(a.reflection_points(), b.reflection_points());
    prop_assert_eq!(a.resistances().len(), b.resistances().len());
    for (damage_type, value) in a.resistances() {
        prop_assert_eq!(
            value.to_bits(),
            b.resistance(damage_type.as_str()).to_bits()
        );
    }
    Ok(())
}

proptest! {
    /// For any modifier list, `combine` and `combine_vectorized` agree
    /// bit for bit.
    #[test]
    fn prop_combine_paths_agree(
        current in -500.0f64..500.0,
        cap in 0.0f64..2000.0,
        mods in proptest::collection::vec(modifier_strategy(), 0..64),
    ) {
        let scalar = combine(current, cap, &mods).unwrap();
        let vectorized = combine_vectorized(current, cap, &mods).unwrap();
        prop_assert_eq!(scalar.to_bits(), vectorized.to_bits());
    }

    /// For any batch, the scalar and vectorized paths produce
    /// bit-for-bit identical stat sets.
    #[test]
    fn prop_batch_paths_agree(
        entries in proptest::collection::vec(entry_strategy(), 0..48),
    ) {
        let mut scalar = StatSet::new();
        let mut vectorized = StatSet::new();

        scalar.apply_batch(&entries).unwrap();
        vectorized.apply_batch_vectorized(&entries).unwrap();

        assert_bitwise_equal(&scalar, &vectorized)?;
    }

    /// Capped stats never exceed their caps, for any batch.
    #[test]
    fn prop_caps_hold(
        entries in proptest::collection::vec(entry_strategy(), 0..48),
    ) {
        let mut stats = StatSet::new();
        stats.apply_batch(&entries).unwrap();

        let caps = stats.caps();
        prop_assert!(stats.hp() <= caps.hp);
        prop_assert!(stats.mutation_rate() <= caps.mutation_rate);
        for value in stats.resistances().values() {
            prop_assert!(*value <= caps.resistance);
        }
    }
}
