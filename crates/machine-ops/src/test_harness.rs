//! Test harness for machine-ops unit and integration tests
//!
//! # Example
//!
//! ```rust
//! use machine_ops::Properties;
//! use machine_ops::test_harness::*;
//!
//! let zone = new_zone();
//! let builder = builder64(&zone);
//! assert_flags(
//!     builder.int64_add(),
//!     Properties::PURE | Properties::COMMUTATIVE | Properties::ASSOCIATIVE,
//! );
//! ```

#![allow(
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::manual_assert
)]

use crate::{
    IrOpcode, MachineOperatorBuilder, MachineRepresentation, Operator, Properties,
    WriteBarrierKind, Zone,
};

pub const ALL_REPRESENTATIONS: [MachineRepresentation; 6] = MachineRepresentation::ALL;

pub const ALL_WRITE_BARRIERS: [WriteBarrierKind; 2] = [
    WriteBarrierKind::NoWriteBarrier,
    WriteBarrierKind::FullWriteBarrier,
];

pub fn new_zone() -> Zone {
    Zone::new()
}

pub fn builder32(zone: &Zone) -> MachineOperatorBuilder<'_> {
    MachineOperatorBuilder::new(zone, MachineRepresentation::Word32)
}

pub fn builder64(zone: &Zone) -> MachineOperatorBuilder<'_> {
    MachineOperatorBuilder::new(zone, MachineRepresentation::Word64)
}

/// Assert that `op` carries exactly `expected`, naming both sets on failure.
pub fn assert_flags(op: &Operator, expected: Properties) {
    if op.properties() != expected {
        panic!(
            "{} has properties {:?}, expected {:?}",
            op.mnemonic(),
            op.properties(),
            expected
        );
    }
}

/// Assert opcode, name and arity in one go.
pub fn assert_shape(op: &Operator, opcode: IrOpcode, inputs: usize, outputs: usize) {
    assert_eq!(op.opcode(), opcode, "opcode of {op}");
    assert_eq!(op.mnemonic(), opcode.name(), "mnemonic of {op}");
    assert_eq!(op.input_count(), inputs, "input count of {op}");
    assert_eq!(op.output_count(), outputs, "output count of {op}");
}

/// Every parameterless descriptor, built through the named factory methods.
pub fn named_catalog<'z>(b: &MachineOperatorBuilder<'z>) -> Vec<&'z Operator> {
    vec![
        b.word32_and(),
        b.word32_or(),
        b.word32_xor(),
        b.word32_shl(),
        b.word32_shr(),
        b.word32_sar(),
        b.word32_equal(),
        b.word64_and(),
        b.word64_or(),
        b.word64_xor(),
        b.word64_shl(),
        b.word64_shr(),
        b.word64_sar(),
        b.word64_equal(),
        b.int32_add(),
        b.int32_sub(),
        b.int32_mul(),
        b.int32_div(),
        b.int32_udiv(),
        b.int32_mod(),
        b.int32_umod(),
        b.int32_less_than(),
        b.int32_less_than_or_equal(),
        b.uint32_less_than(),
        b.uint32_less_than_or_equal(),
        b.int64_add(),
        b.int64_sub(),
        b.int64_mul(),
        b.int64_div(),
        b.int64_udiv(),
        b.int64_mod(),
        b.int64_umod(),
        b.int64_less_than(),
        b.int64_less_than_or_equal(),
        b.convert_int32_to_int64(),
        b.convert_int64_to_int32(),
        b.convert_int32_to_float64(),
        b.convert_uint32_to_float64(),
        b.convert_float64_to_int32(),
        b.convert_float64_to_uint32(),
        b.float64_add(),
        b.float64_sub(),
        b.float64_mul(),
        b.float64_div(),
        b.float64_mod(),
        b.float64_equal(),
        b.float64_less_than(),
        b.float64_less_than_or_equal(),
    ]
}
