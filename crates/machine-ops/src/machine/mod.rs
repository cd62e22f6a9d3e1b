//! Machine-level operators: storage representations, write barriers and the
//! builder that hands out operator descriptors for a fixed word width.

mod builder;
pub(crate) mod catalog;
mod representation;

pub use builder::MachineOperatorBuilder;
pub use catalog::Shape;
pub use representation::{MachineRepresentation, StoreRepresentation, WriteBarrierKind};
