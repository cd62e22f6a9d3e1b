use crate::operator::{IrOpcode, Operator, Operator1};
use crate::zone::Zone;
use crate::{Error, Result};

use super::catalog::{CATALOG, Shape};
use super::{MachineRepresentation, StoreRepresentation, WriteBarrierKind};

/// Builds machine-level operators.
///
/// The operators are machine-level but machine-independent: they form a
/// language suitable for generating code for any target word width. Every
/// call allocates a fresh descriptor in the zone; identical requests are
/// structurally equal but never shared.
#[derive(Debug, Clone, Copy)]
pub struct MachineOperatorBuilder<'z> {
    zone: &'z Zone,
    word: MachineRepresentation,
}

impl<'z> MachineOperatorBuilder<'z> {
    /// Create a builder for the given native word width.
    ///
    /// # Panics
    ///
    /// Panics unless `word` is `Word32` or `Word64`. The word width is fixed
    /// for the whole compilation unit, so a bad value is a caller bug.
    pub fn new(zone: &'z Zone, word: MachineRepresentation) -> Self {
        match Self::try_new(zone, word) {
            Ok(builder) => builder,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked form of [`MachineOperatorBuilder::new`].
    pub fn try_new(zone: &'z Zone, word: MachineRepresentation) -> Result<Self> {
        if !matches!(
            word,
            MachineRepresentation::Word32 | MachineRepresentation::Word64
        ) {
            return Err(Error::InvalidWordWidth(word));
        }
        tracing::debug!(%word, "created machine operator builder");
        Ok(Self { zone, word })
    }

    /// Builder for the host's pointer width.
    pub fn for_target(zone: &'z Zone) -> Self {
        Self::new(zone, MachineRepresentation::pointer_rep())
    }

    fn build(&self, opcode: IrOpcode) -> &'z Operator {
        let shape = Shape::of(opcode);
        tracing::trace!(%opcode, "allocating operator");
        self.zone.alloc(Operator::new(
            opcode,
            shape.properties(),
            shape.input_count(),
            shape.output_count(),
            opcode.name(),
        ))
    }

    fn build1<T: Copy>(&self, opcode: IrOpcode, parameter: T) -> &'z Operator1<T> {
        let shape = Shape::of(opcode);
        tracing::trace!(%opcode, "allocating parameterized operator");
        self.zone.alloc(Operator1::new(
            Operator::new(
                opcode,
                shape.properties(),
                shape.input_count(),
                shape.output_count(),
                opcode.name(),
            ),
            parameter,
        ))
    }

    // === Memory ===

    /// `load [base + index]`.
    ///
    /// Never writes, but its result depends on memory, so it is not pure.
    pub fn load(&self, rep: MachineRepresentation) -> &'z Operator1<MachineRepresentation> {
        self.build1(IrOpcode::Load, rep)
    }

    /// `store [base + index], value`.
    ///
    /// The barrier kind is the caller's decision; nothing here inspects the
    /// stored value.
    pub fn store(
        &self,
        rep: MachineRepresentation,
        write_barrier_kind: WriteBarrierKind,
    ) -> &'z Operator1<StoreRepresentation> {
        self.build1(
            IrOpcode::Store,
            StoreRepresentation::new(rep, write_barrier_kind),
        )
    }

    pub fn store_no_barrier(
        &self,
        rep: MachineRepresentation,
    ) -> &'z Operator1<StoreRepresentation> {
        self.store(rep, WriteBarrierKind::default())
    }

    // === Pointer-width words ===

    pub fn word_and(&self) -> &'z Operator {
        if self.is64() {
            self.word64_and()
        } else {
            self.word32_and()
        }
    }

    pub fn word_or(&self) -> &'z Operator {
        if self.is64() {
            self.word64_or()
        } else {
            self.word32_or()
        }
    }

    pub fn word_xor(&self) -> &'z Operator {
        if self.is64() {
            self.word64_xor()
        } else {
            self.word32_xor()
        }
    }

    pub fn word_shl(&self) -> &'z Operator {
        if self.is64() {
            self.word64_shl()
        } else {
            self.word32_shl()
        }
    }

    pub fn word_shr(&self) -> &'z Operator {
        if self.is64() {
            self.word64_shr()
        } else {
            self.word32_shr()
        }
    }

    pub fn word_sar(&self) -> &'z Operator {
        if self.is64() {
            self.word64_sar()
        } else {
            self.word32_sar()
        }
    }

    pub fn word_equal(&self) -> &'z Operator {
        if self.is64() {
            self.word64_equal()
        } else {
            self.word32_equal()
        }
    }

    // === 32-bit words ===

    pub fn word32_and(&self) -> &'z Operator {
        self.build(IrOpcode::Word32And)
    }

    pub fn word32_or(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Or)
    }

    pub fn word32_xor(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Xor)
    }

    pub fn word32_shl(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Shl)
    }

    pub fn word32_shr(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Shr)
    }

    pub fn word32_sar(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Sar)
    }

    pub fn word32_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Word32Equal)
    }

    // === 64-bit words ===

    pub fn word64_and(&self) -> &'z Operator {
        self.build(IrOpcode::Word64And)
    }

    pub fn word64_or(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Or)
    }

    pub fn word64_xor(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Xor)
    }

    pub fn word64_shl(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Shl)
    }

    pub fn word64_shr(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Shr)
    }

    pub fn word64_sar(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Sar)
    }

    pub fn word64_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Word64Equal)
    }

    // === 32-bit integer arithmetic ===

    pub fn int32_add(&self) -> &'z Operator {
        self.build(IrOpcode::Int32Add)
    }

    pub fn int32_sub(&self) -> &'z Operator {
        self.build(IrOpcode::Int32Sub)
    }

    pub fn int32_mul(&self) -> &'z Operator {
        self.build(IrOpcode::Int32Mul)
    }

    pub fn int32_div(&self) -> &'z Operator {
        self.build(IrOpcode::Int32Div)
    }

    pub fn int32_udiv(&self) -> &'z Operator {
        self.build(IrOpcode::Int32UDiv)
    }

    pub fn int32_mod(&self) -> &'z Operator {
        self.build(IrOpcode::Int32Mod)
    }

    pub fn int32_umod(&self) -> &'z Operator {
        self.build(IrOpcode::Int32UMod)
    }

    pub fn int32_less_than(&self) -> &'z Operator {
        self.build(IrOpcode::Int32LessThan)
    }

    pub fn int32_less_than_or_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Int32LessThanOrEqual)
    }

    pub fn uint32_less_than(&self) -> &'z Operator {
        self.build(IrOpcode::Uint32LessThan)
    }

    pub fn uint32_less_than_or_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Uint32LessThanOrEqual)
    }

    // === 64-bit integer arithmetic ===

    pub fn int64_add(&self) -> &'z Operator {
        self.build(IrOpcode::Int64Add)
    }

    pub fn int64_sub(&self) -> &'z Operator {
        self.build(IrOpcode::Int64Sub)
    }

    pub fn int64_mul(&self) -> &'z Operator {
        self.build(IrOpcode::Int64Mul)
    }

    pub fn int64_div(&self) -> &'z Operator {
        self.build(IrOpcode::Int64Div)
    }

    pub fn int64_udiv(&self) -> &'z Operator {
        self.build(IrOpcode::Int64UDiv)
    }

    pub fn int64_mod(&self) -> &'z Operator {
        self.build(IrOpcode::Int64Mod)
    }

    pub fn int64_umod(&self) -> &'z Operator {
        self.build(IrOpcode::Int64UMod)
    }

    pub fn int64_less_than(&self) -> &'z Operator {
        self.build(IrOpcode::Int64LessThan)
    }

    pub fn int64_less_than_or_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Int64LessThanOrEqual)
    }

    // === Conversions ===

    pub fn convert_int32_to_int64(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertInt32ToInt64)
    }

    pub fn convert_int64_to_int32(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertInt64ToInt32)
    }

    pub fn convert_int32_to_float64(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertInt32ToFloat64)
    }

    pub fn convert_uint32_to_float64(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertUint32ToFloat64)
    }

    pub fn convert_float64_to_int32(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertFloat64ToInt32)
    }

    pub fn convert_float64_to_uint32(&self) -> &'z Operator {
        self.build(IrOpcode::ConvertFloat64ToUint32)
    }

    // === 64-bit floating point ===

    pub fn float64_add(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Add)
    }

    pub fn float64_sub(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Sub)
    }

    pub fn float64_mul(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Mul)
    }

    pub fn float64_div(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Div)
    }

    pub fn float64_mod(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Mod)
    }

    pub fn float64_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Float64Equal)
    }

    pub fn float64_less_than(&self) -> &'z Operator {
        self.build(IrOpcode::Float64LessThan)
    }

    pub fn float64_less_than_or_equal(&self) -> &'z Operator {
        self.build(IrOpcode::Float64LessThanOrEqual)
    }

    // === Catalog access ===

    /// Build any parameterless operator by opcode.
    pub fn simple(&self, opcode: IrOpcode) -> Result<&'z Operator> {
        if opcode.takes_parameter() {
            return Err(Error::ParameterRequired(opcode.name()));
        }
        Ok(self.build(opcode))
    }

    /// Opcodes that [`MachineOperatorBuilder::simple`] accepts, in catalog order.
    pub fn catalog_opcodes() -> impl Iterator<Item = IrOpcode> {
        CATALOG
            .iter()
            .map(|row| row.opcode)
            .filter(|op| !op.takes_parameter())
    }

    /// Resolve a width-polymorphic `Word*` name (`WordAnd`, `WordEqual`, ...)
    /// to the fixed-width opcode this builder would produce.
    pub fn resolve_word_opcode(&self, name: &str) -> Option<IrOpcode> {
        let suffix = name.strip_prefix("Word")?;
        if suffix.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let width = if self.is64() { "Word64" } else { "Word32" };
        format!("{width}{suffix}").parse().ok()
    }

    // === Accessors ===

    pub fn is32(&self) -> bool {
        self.word == MachineRepresentation::Word32
    }

    pub fn is64(&self) -> bool {
        self.word == MachineRepresentation::Word64
    }

    pub fn word(&self) -> MachineRepresentation {
        self.word
    }

    pub fn zone(&self) -> &'z Zone {
        self.zone
    }
}
