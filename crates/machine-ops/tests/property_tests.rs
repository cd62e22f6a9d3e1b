//! Property-based tests for the machine operator builder.
//!
//! Uses `proptest` to pick representations, barrier kinds, widths and opcodes
//! and checks the invariants that hold for every choice:
//! - Load and store arity never depends on the representation
//! - Pointer-width word operators resolve to the builder's width
//! - Building by opcode matches the catalog shape

use machine_ops::test_harness::*;
use machine_ops::{
    IrOpcode, MachineOperatorBuilder, MachineRepresentation, Shape, WriteBarrierKind,
};
use proptest::prelude::*;

fn representation() -> impl Strategy<Value = MachineRepresentation> {
    proptest::sample::select(MachineRepresentation::ALL.to_vec())
}

fn write_barrier() -> impl Strategy<Value = WriteBarrierKind> {
    proptest::sample::select(ALL_WRITE_BARRIERS.to_vec())
}

fn word_width() -> impl Strategy<Value = MachineRepresentation> {
    prop_oneof![
        Just(MachineRepresentation::Word32),
        Just(MachineRepresentation::Word64),
    ]
}

fn parameterless_opcode() -> impl Strategy<Value = IrOpcode> {
    proptest::sample::select(MachineOperatorBuilder::catalog_opcodes().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn load_is_binary_with_one_output(word in word_width(), rep in representation()) {
        let zone = new_zone();
        let op = MachineOperatorBuilder::new(&zone, word).load(rep);
        prop_assert_eq!(op.input_count(), 2);
        prop_assert_eq!(op.output_count(), 1);
        prop_assert!(!op.is_pure());
        prop_assert_eq!(*op.parameter(), rep);
    }

    #[test]
    fn store_takes_three_inputs_and_produces_nothing(
        word in word_width(),
        rep in representation(),
        kind in write_barrier(),
    ) {
        let zone = new_zone();
        let op = MachineOperatorBuilder::new(&zone, word).store(rep, kind);
        prop_assert_eq!(op.input_count(), 3);
        prop_assert_eq!(op.output_count(), 0);
        prop_assert_eq!(op.parameter().rep, rep);
        prop_assert_eq!(op.parameter().write_barrier_kind, kind);
    }

    #[test]
    fn word_ops_follow_builder_width(word in word_width()) {
        let zone = new_zone();
        let b = MachineOperatorBuilder::new(&zone, word);
        let prefix = if word == MachineRepresentation::Word64 { "Word64" } else { "Word32" };
        for op in [b.word_and(), b.word_or(), b.word_xor(), b.word_shl(), b.word_shr(), b.word_sar(), b.word_equal()] {
            prop_assert!(op.mnemonic().starts_with(prefix), "{} for {}", op, word);
        }
    }

    #[test]
    fn simple_matches_catalog_shape(word in word_width(), opcode in parameterless_opcode()) {
        let zone = new_zone();
        let op = MachineOperatorBuilder::new(&zone, word).simple(opcode).unwrap();
        let shape = Shape::of(opcode);
        prop_assert_eq!(op.opcode(), opcode);
        prop_assert_eq!(op.properties(), shape.properties());
        prop_assert_eq!(op.input_count(), shape.input_count());
        prop_assert_eq!(op.output_count(), shape.output_count());
        prop_assert!(op.is_pure());
    }

    #[test]
    fn non_word_widths_are_rejected(rep in representation()) {
        let zone = new_zone();
        let accepted = MachineOperatorBuilder::try_new(&zone, rep).is_ok();
        prop_assert_eq!(
            accepted,
            matches!(rep, MachineRepresentation::Word32 | MachineRepresentation::Word64)
        );
    }
}
