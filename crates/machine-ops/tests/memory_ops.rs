//! Load and store descriptors.

use machine_ops::test_harness::*;
use machine_ops::{
    IrOpcode, MachineRepresentation, Properties, StoreRepresentation, WriteBarrierKind,
};

#[test]
fn test_load_arity_for_every_representation() {
    let zone = new_zone();
    let b = builder64(&zone);
    for rep in ALL_REPRESENTATIONS {
        let op = b.load(rep);
        assert_shape(op, IrOpcode::Load, 2, 1);
        assert_eq!(*op.parameter(), rep);
    }
}

#[test]
fn test_load_never_writes_but_is_not_pure() {
    let zone = new_zone();
    let op = builder32(&zone).load(MachineRepresentation::Tagged);
    assert!(op.has_property(Properties::NO_WRITE));
    assert!(op.has_property(Properties::NO_THROW));
    assert!(!op.has_property(Properties::NO_READ));
    assert!(!op.is_pure());
    assert!(!op.is_commutative());
}

#[test]
fn test_store_arity_for_every_representation_and_barrier() {
    let zone = new_zone();
    let b = builder32(&zone);
    for rep in ALL_REPRESENTATIONS {
        for kind in ALL_WRITE_BARRIERS {
            let op = b.store(rep, kind);
            assert_shape(op, IrOpcode::Store, 3, 0);
            assert_eq!(*op.parameter(), StoreRepresentation::new(rep, kind));
            assert!(!op.is_pure());
        }
    }
}

#[test]
fn test_tagged_full_barrier_store_scenario() {
    let zone = new_zone();
    let op = builder64(&zone).store(
        MachineRepresentation::Tagged,
        WriteBarrierKind::FullWriteBarrier,
    );
    assert_eq!(
        *op.parameter(),
        StoreRepresentation {
            rep: MachineRepresentation::Tagged,
            write_barrier_kind: WriteBarrierKind::FullWriteBarrier,
        }
    );
    assert!(op.has_property(Properties::NO_READ));
    assert_eq!(op.input_count(), 3);
    assert_eq!(op.output_count(), 0);
    assert_eq!(op.to_string(), "Store[tagged+full]");
}

#[test]
fn test_store_defaults_to_no_barrier() {
    let zone = new_zone();
    let b = builder64(&zone);
    let op = b.store_no_barrier(MachineRepresentation::Word32);
    assert_eq!(
        op.parameter().write_barrier_kind,
        WriteBarrierKind::NoWriteBarrier
    );
    assert_eq!(
        op,
        b.store(MachineRepresentation::Word32, WriteBarrierKind::default())
    );
}

#[test]
fn test_load_display_names_representation() {
    let zone = new_zone();
    let op = builder32(&zone).load(MachineRepresentation::Float64);
    assert_eq!(op.to_string(), "Load[float64]");
}
