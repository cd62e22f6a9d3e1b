use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Opcode tag space for machine-level operators.
///
/// One tag per distinct operation and width. The discriminant doubles as the
/// row index into the builder's catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IrOpcode {
    // Memory
    Load = 0,
    Store = 1,
    // 32-bit words
    Word32And = 2,
    Word32Or = 3,
    Word32Xor = 4,
    Word32Shl = 5,
    Word32Shr = 6,
    Word32Sar = 7,
    Word32Equal = 8,
    // 64-bit words
    Word64And = 9,
    Word64Or = 10,
    Word64Xor = 11,
    Word64Shl = 12,
    Word64Shr = 13,
    Word64Sar = 14,
    Word64Equal = 15,
    // 32-bit integer arithmetic
    Int32Add = 16,
    Int32Sub = 17,
    Int32Mul = 18,
    Int32Div = 19,
    Int32UDiv = 20,
    Int32Mod = 21,
    Int32UMod = 22,
    Int32LessThan = 23,
    Int32LessThanOrEqual = 24,
    Uint32LessThan = 25,
    Uint32LessThanOrEqual = 26,
    // 64-bit integer arithmetic
    Int64Add = 27,
    Int64Sub = 28,
    Int64Mul = 29,
    Int64Div = 30,
    Int64UDiv = 31,
    Int64Mod = 32,
    Int64UMod = 33,
    Int64LessThan = 34,
    Int64LessThanOrEqual = 35,
    // Conversions
    ConvertInt32ToInt64 = 36,
    ConvertInt64ToInt32 = 37,
    ConvertInt32ToFloat64 = 38,
    ConvertUint32ToFloat64 = 39,
    ConvertFloat64ToInt32 = 40,
    ConvertFloat64ToUint32 = 41,
    // 64-bit floating point
    Float64Add = 42,
    Float64Sub = 43,
    Float64Mul = 44,
    Float64Div = 45,
    Float64Mod = 46,
    Float64Equal = 47,
    Float64LessThan = 48,
    Float64LessThanOrEqual = 49,
}

impl IrOpcode {
    pub const COUNT: usize = 50;

    /// Every opcode, in discriminant order.
    pub const ALL: [IrOpcode; Self::COUNT] = [
        Self::Load,
        Self::Store,
        Self::Word32And,
        Self::Word32Or,
        Self::Word32Xor,
        Self::Word32Shl,
        Self::Word32Shr,
        Self::Word32Sar,
        Self::Word32Equal,
        Self::Word64And,
        Self::Word64Or,
        Self::Word64Xor,
        Self::Word64Shl,
        Self::Word64Shr,
        Self::Word64Sar,
        Self::Word64Equal,
        Self::Int32Add,
        Self::Int32Sub,
        Self::Int32Mul,
        Self::Int32Div,
        Self::Int32UDiv,
        Self::Int32Mod,
        Self::Int32UMod,
        Self::Int32LessThan,
        Self::Int32LessThanOrEqual,
        Self::Uint32LessThan,
        Self::Uint32LessThanOrEqual,
        Self::Int64Add,
        Self::Int64Sub,
        Self::Int64Mul,
        Self::Int64Div,
        Self::Int64UDiv,
        Self::Int64Mod,
        Self::Int64UMod,
        Self::Int64LessThan,
        Self::Int64LessThanOrEqual,
        Self::ConvertInt32ToInt64,
        Self::ConvertInt64ToInt32,
        Self::ConvertInt32ToFloat64,
        Self::ConvertUint32ToFloat64,
        Self::ConvertFloat64ToInt32,
        Self::ConvertFloat64ToUint32,
        Self::Float64Add,
        Self::Float64Sub,
        Self::Float64Mul,
        Self::Float64Div,
        Self::Float64Mod,
        Self::Float64Equal,
        Self::Float64LessThan,
        Self::Float64LessThanOrEqual,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::Store => "Store",
            Self::Word32And => "Word32And",
            Self::Word32Or => "Word32Or",
            Self::Word32Xor => "Word32Xor",
            Self::Word32Shl => "Word32Shl",
            Self::Word32Shr => "Word32Shr",
            Self::Word32Sar => "Word32Sar",
            Self::Word32Equal => "Word32Equal",
            Self::Word64And => "Word64And",
            Self::Word64Or => "Word64Or",
            Self::Word64Xor => "Word64Xor",
            Self::Word64Shl => "Word64Shl",
            Self::Word64Shr => "Word64Shr",
            Self::Word64Sar => "Word64Sar",
            Self::Word64Equal => "Word64Equal",
            Self::Int32Add => "Int32Add",
            Self::Int32Sub => "Int32Sub",
            Self::Int32Mul => "Int32Mul",
            Self::Int32Div => "Int32Div",
            Self::Int32UDiv => "Int32UDiv",
            Self::Int32Mod => "Int32Mod",
            Self::Int32UMod => "Int32UMod",
            Self::Int32LessThan => "Int32LessThan",
            Self::Int32LessThanOrEqual => "Int32LessThanOrEqual",
            Self::Uint32LessThan => "Uint32LessThan",
            Self::Uint32LessThanOrEqual => "Uint32LessThanOrEqual",
            Self::Int64Add => "Int64Add",
            Self::Int64Sub => "Int64Sub",
            Self::Int64Mul => "Int64Mul",
            Self::Int64Div => "Int64Div",
            Self::Int64UDiv => "Int64UDiv",
            Self::Int64Mod => "Int64Mod",
            Self::Int64UMod => "Int64UMod",
            Self::Int64LessThan => "Int64LessThan",
            Self::Int64LessThanOrEqual => "Int64LessThanOrEqual",
            Self::ConvertInt32ToInt64 => "ConvertInt32ToInt64",
            Self::ConvertInt64ToInt32 => "ConvertInt64ToInt32",
            Self::ConvertInt32ToFloat64 => "ConvertInt32ToFloat64",
            Self::ConvertUint32ToFloat64 => "ConvertUint32ToFloat64",
            Self::ConvertFloat64ToInt32 => "ConvertFloat64ToInt32",
            Self::ConvertFloat64ToUint32 => "ConvertFloat64ToUint32",
            Self::Float64Add => "Float64Add",
            Self::Float64Sub => "Float64Sub",
            Self::Float64Mul => "Float64Mul",
            Self::Float64Div => "Float64Div",
            Self::Float64Mod => "Float64Mod",
            Self::Float64Equal => "Float64Equal",
            Self::Float64LessThan => "Float64LessThan",
            Self::Float64LessThanOrEqual => "Float64LessThanOrEqual",
        }
    }

    /// Whether descriptors for this opcode carry a typed parameter.
    #[must_use]
    pub const fn takes_parameter(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }
}

impl fmt::Display for IrOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IrOpcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOpcode(s.to_string()))
    }
}
