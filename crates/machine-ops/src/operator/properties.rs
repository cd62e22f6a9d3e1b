use bitflags::bitflags;

bitflags! {
    /// Algebraic and effect properties of an operator.
    ///
    /// Optimization passes trust these to decide whether nodes may be
    /// reordered, deduplicated or hoisted.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Properties: u8 {
        /// Operands may be swapped.
        const COMMUTATIVE = 1 << 0;
        /// Repeated applications may be regrouped.
        const ASSOCIATIVE = 1 << 1;
        /// Does not read memory or any other effectful state.
        const NO_READ = 1 << 2;
        /// Does not write memory or any other effectful state.
        const NO_WRITE = 1 << 3;
        /// Cannot throw or deoptimize.
        const NO_THROW = 1 << 4;

        /// Result depends only on the inputs.
        const PURE = Self::NO_READ.bits() | Self::NO_WRITE.bits() | Self::NO_THROW.bits();
    }
}

impl Properties {
    pub const fn is_pure(self) -> bool {
        self.contains(Self::PURE)
    }
}
