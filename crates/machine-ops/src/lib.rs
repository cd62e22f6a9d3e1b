#![allow(
    clippy::must_use_candidate, // every factory method returns a descriptor; annotating each adds noise
    clippy::missing_panics_doc // the only panic is the documented word-width contract check
)]

pub mod error;
pub mod machine;
pub mod operator;
pub mod zone;

/// Test harness module for writing unit and integration tests.
///
/// This module is only available when running tests or when the
/// `test-harness` feature is enabled.
#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use error::{Error, Result};
pub use machine::{
    MachineOperatorBuilder, MachineRepresentation, Shape, StoreRepresentation, WriteBarrierKind,
};
pub use operator::{IrOpcode, Operator, Operator1, Properties};
pub use zone::Zone;
