//! Operator descriptors: the vocabulary IR nodes are labelled with.
//!
//! A descriptor names a primitive operation, fixes its arity and carries the
//! property flags optimization passes rely on. Descriptors are immutable once
//! built and live as long as the zone they were allocated in.

mod display;
mod opcode;
mod properties;

use std::ops::Deref;

pub use opcode::IrOpcode;
pub use properties::Properties;

/// An operator without a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    opcode: IrOpcode,
    properties: Properties,
    input_count: usize,
    output_count: usize,
    mnemonic: &'static str,
}

impl Operator {
    pub const fn new(
        opcode: IrOpcode,
        properties: Properties,
        input_count: usize,
        output_count: usize,
        mnemonic: &'static str,
    ) -> Self {
        Self {
            opcode,
            properties,
            input_count,
            output_count,
            mnemonic,
        }
    }

    pub const fn opcode(&self) -> IrOpcode {
        self.opcode
    }

    pub const fn properties(&self) -> Properties {
        self.properties
    }

    pub const fn input_count(&self) -> usize {
        self.input_count
    }

    pub const fn output_count(&self) -> usize {
        self.output_count
    }

    pub const fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    pub const fn has_property(&self, property: Properties) -> bool {
        self.properties.contains(property)
    }

    pub const fn is_pure(&self) -> bool {
        self.properties.is_pure()
    }

    pub const fn is_commutative(&self) -> bool {
        self.has_property(Properties::COMMUTATIVE)
    }

    pub const fn is_associative(&self) -> bool {
        self.has_property(Properties::ASSOCIATIVE)
    }

    /// True when both references point at the same allocation.
    ///
    /// `==` compares structure; two calls to the same factory method are
    /// equal but never the same descriptor.
    pub fn same_identity(a: &Operator, b: &Operator) -> bool {
        std::ptr::eq(a, b)
    }
}

/// An operator carrying one typed parameter alongside the base descriptor.
///
/// Derefs to [`Operator`], so graph code can treat every descriptor alike and
/// only the passes that care look at [`Operator1::parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator1<T> {
    base: Operator,
    parameter: T,
}

impl<T: Copy> Operator1<T> {
    pub const fn new(base: Operator, parameter: T) -> Self {
        Self { base, parameter }
    }

    pub const fn parameter(&self) -> &T {
        &self.parameter
    }

    pub const fn operator(&self) -> &Operator {
        &self.base
    }
}

impl<T> Deref for Operator1<T> {
    type Target = Operator;

    fn deref(&self) -> &Operator {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_construction_values() {
        let op = Operator::new(
            IrOpcode::Int32Add,
            Properties::PURE | Properties::COMMUTATIVE,
            2,
            1,
            "Int32Add",
        );
        assert_eq!(op.opcode(), IrOpcode::Int32Add);
        assert_eq!(op.input_count(), 2);
        assert_eq!(op.output_count(), 1);
        assert_eq!(op.mnemonic(), "Int32Add");
        assert!(op.is_pure());
        assert!(op.is_commutative());
        assert!(!op.is_associative());
    }

    #[test]
    fn parameterized_operator_derefs_to_base() {
        let base = Operator::new(
            IrOpcode::Load,
            Properties::NO_WRITE | Properties::NO_THROW,
            2,
            1,
            "Load",
        );
        let op = Operator1::new(base, 42u8);
        assert_eq!(*op.parameter(), 42);
        assert_eq!(op.opcode(), IrOpcode::Load);
        assert_eq!(op.operator(), &base);
        assert!(!op.is_pure());
    }

    #[test]
    fn identity_is_pointer_based() {
        let a = Operator::new(IrOpcode::Int32Sub, Properties::PURE, 2, 1, "Int32Sub");
        let b = a;
        assert_eq!(a, b);
        assert!(Operator::same_identity(&a, &a));
        assert!(!Operator::same_identity(&a, &b));
    }
}
