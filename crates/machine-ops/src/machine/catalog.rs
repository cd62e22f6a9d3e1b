//! Declarative operator catalog.
//!
//! One row per opcode, in discriminant order, naming the shape that fixes its
//! arity and property flags. This table is the legality contract optimization
//! passes trust: division and modulo are never commutative, shifts and
//! comparisons are order-sensitive, and floating point is never associative.

use crate::operator::{IrOpcode, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `[base + index]`, reads memory.
    Load,
    /// `[base + index] = value`, writes memory.
    Store,
    /// Pure binary operator.
    Binop,
    /// Pure, commutative binary operator.
    BinopC,
    /// Pure, commutative and associative binary operator.
    BinopAC,
    /// Pure unary operator.
    Unop,
}

impl Shape {
    /// Shape the catalog assigns to `opcode`.
    pub fn of(opcode: IrOpcode) -> Shape {
        lookup(opcode).shape
    }

    pub const fn properties(self) -> Properties {
        match self {
            Self::Load => Properties::NO_WRITE.union(Properties::NO_THROW),
            Self::Store => Properties::NO_READ.union(Properties::NO_THROW),
            Self::Binop | Self::Unop => Properties::PURE,
            Self::BinopC => Properties::PURE.union(Properties::COMMUTATIVE),
            Self::BinopAC => Properties::PURE
                .union(Properties::COMMUTATIVE)
                .union(Properties::ASSOCIATIVE),
        }
    }

    pub const fn input_count(self) -> usize {
        match self {
            Self::Store => 3,
            Self::Load | Self::Binop | Self::BinopC | Self::BinopAC => 2,
            Self::Unop => 1,
        }
    }

    pub const fn output_count(self) -> usize {
        match self {
            Self::Store => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogRow {
    pub opcode: IrOpcode,
    pub shape: Shape,
}

const fn row(opcode: IrOpcode, shape: Shape) -> CatalogRow {
    CatalogRow { opcode, shape }
}

pub static CATALOG: [CatalogRow; IrOpcode::COUNT] = [
    // Memory
    row(IrOpcode::Load, Shape::Load),
    row(IrOpcode::Store, Shape::Store),
    // 32-bit words
    row(IrOpcode::Word32And, Shape::BinopAC),
    row(IrOpcode::Word32Or, Shape::BinopAC),
    row(IrOpcode::Word32Xor, Shape::BinopAC),
    row(IrOpcode::Word32Shl, Shape::Binop),
    row(IrOpcode::Word32Shr, Shape::Binop),
    row(IrOpcode::Word32Sar, Shape::Binop),
    row(IrOpcode::Word32Equal, Shape::BinopC),
    // 64-bit words
    row(IrOpcode::Word64And, Shape::BinopAC),
    row(IrOpcode::Word64Or, Shape::BinopAC),
    row(IrOpcode::Word64Xor, Shape::BinopAC),
    row(IrOpcode::Word64Shl, Shape::Binop),
    row(IrOpcode::Word64Shr, Shape::Binop),
    row(IrOpcode::Word64Sar, Shape::Binop),
    row(IrOpcode::Word64Equal, Shape::BinopC),
    // 32-bit integer arithmetic
    row(IrOpcode::Int32Add, Shape::BinopAC),
    row(IrOpcode::Int32Sub, Shape::Binop),
    row(IrOpcode::Int32Mul, Shape::BinopAC),
    row(IrOpcode::Int32Div, Shape::Binop),
    row(IrOpcode::Int32UDiv, Shape::Binop),
    row(IrOpcode::Int32Mod, Shape::Binop),
    row(IrOpcode::Int32UMod, Shape::Binop),
    row(IrOpcode::Int32LessThan, Shape::Binop),
    row(IrOpcode::Int32LessThanOrEqual, Shape::Binop),
    row(IrOpcode::Uint32LessThan, Shape::Binop),
    row(IrOpcode::Uint32LessThanOrEqual, Shape::Binop),
    // 64-bit integer arithmetic
    row(IrOpcode::Int64Add, Shape::BinopAC),
    row(IrOpcode::Int64Sub, Shape::Binop),
    row(IrOpcode::Int64Mul, Shape::BinopAC),
    row(IrOpcode::Int64Div, Shape::Binop),
    row(IrOpcode::Int64UDiv, Shape::Binop),
    row(IrOpcode::Int64Mod, Shape::Binop),
    row(IrOpcode::Int64UMod, Shape::Binop),
    row(IrOpcode::Int64LessThan, Shape::Binop),
    row(IrOpcode::Int64LessThanOrEqual, Shape::Binop),
    // Conversions
    row(IrOpcode::ConvertInt32ToInt64, Shape::Unop),
    row(IrOpcode::ConvertInt64ToInt32, Shape::Unop),
    row(IrOpcode::ConvertInt32ToFloat64, Shape::Unop),
    row(IrOpcode::ConvertUint32ToFloat64, Shape::Unop),
    // TODO: rounding mode parameter for float-to-integer conversions.
    row(IrOpcode::ConvertFloat64ToInt32, Shape::Unop),
    row(IrOpcode::ConvertFloat64ToUint32, Shape::Unop),
    // 64-bit floating point
    row(IrOpcode::Float64Add, Shape::BinopC),
    row(IrOpcode::Float64Sub, Shape::Binop),
    row(IrOpcode::Float64Mul, Shape::BinopC),
    row(IrOpcode::Float64Div, Shape::Binop),
    row(IrOpcode::Float64Mod, Shape::Binop),
    row(IrOpcode::Float64Equal, Shape::BinopC),
    row(IrOpcode::Float64LessThan, Shape::Binop),
    row(IrOpcode::Float64LessThanOrEqual, Shape::Binop),
];

/// Catalog row for `opcode`.
pub fn lookup(opcode: IrOpcode) -> &'static CatalogRow {
    &CATALOG[opcode as usize]
}
