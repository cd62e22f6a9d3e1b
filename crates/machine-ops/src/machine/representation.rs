use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Storage representations at the machine level.
///
/// - Words are uninterpreted bits of a fixed size, used for integers and
///   pointers. They live in general purpose registers and are not tracked for GC.
/// - `Float64` lives in floating point registers and is not tracked for GC.
/// - `Tagged` is pointer-sized and holds either a small integer or a heap
///   reference under the runtime's tagging scheme. The code generator tracks
///   these precisely for GC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MachineRepresentation {
    Word8 = 0,
    Word16 = 1,
    Word32 = 2,
    Word64 = 3,
    Float64 = 4,
    Tagged = 5,
}

impl MachineRepresentation {
    pub const ALL: [MachineRepresentation; 6] = [
        Self::Word8,
        Self::Word16,
        Self::Word32,
        Self::Word64,
        Self::Float64,
        Self::Tagged,
    ];

    /// Word representation matching the host pointer size.
    #[must_use]
    pub const fn pointer_rep() -> Self {
        if size_of::<usize>() == 8 {
            Self::Word64
        } else {
            Self::Word32
        }
    }

    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            Self::Word8 | Self::Word16 | Self::Word32 | Self::Word64
        )
    }

    #[must_use]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Word8 => 1,
            Self::Word16 => 2,
            Self::Word32 => 4,
            Self::Word64 | Self::Float64 => 8,
            Self::Tagged => size_of::<usize>(),
        }
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Word8 => "word8",
            Self::Word16 => "word16",
            Self::Word32 => "word32",
            Self::Word64 => "word64",
            Self::Float64 => "float64",
            Self::Tagged => "tagged",
        }
    }
}

impl fmt::Display for MachineRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for MachineRepresentation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rep| rep.mnemonic() == s)
            .ok_or_else(|| Error::UnknownRepresentation(s.to_string()))
    }
}

// TODO: barrier kinds narrowed by the stored value's type (e.g. skip the
// barrier for values known to be small integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WriteBarrierKind {
    #[default]
    NoWriteBarrier,
    FullWriteBarrier,
}

impl WriteBarrierKind {
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::NoWriteBarrier => "none",
            Self::FullWriteBarrier => "full",
        }
    }
}

impl fmt::Display for WriteBarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for WriteBarrierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::NoWriteBarrier),
            "full" => Ok(Self::FullWriteBarrier),
            _ => Err(Error::UnknownWriteBarrier(s.to_string())),
        }
    }
}

/// A store needs both a representation and a barrier kind so the code
/// generator can emit the right write barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreRepresentation {
    pub rep: MachineRepresentation,
    pub write_barrier_kind: WriteBarrierKind,
}

impl StoreRepresentation {
    #[must_use]
    pub const fn new(rep: MachineRepresentation, write_barrier_kind: WriteBarrierKind) -> Self {
        Self {
            rep,
            write_barrier_kind,
        }
    }
}

impl fmt::Display for StoreRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.rep, self.write_barrier_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_rep_follows_pointer_size() {
        let expected = if size_of::<usize>() == 8 {
            MachineRepresentation::Word64
        } else {
            MachineRepresentation::Word32
        };
        assert_eq!(MachineRepresentation::pointer_rep(), expected);
        assert_eq!(
            MachineRepresentation::Tagged.size_in_bytes(),
            MachineRepresentation::pointer_rep().size_in_bytes()
        );
    }

    #[test]
    fn representation_mnemonics_parse_back() {
        for rep in MachineRepresentation::ALL {
            assert_eq!(rep.to_string().parse::<MachineRepresentation>(), Ok(rep));
        }
        assert!(matches!(
            "word128".parse::<MachineRepresentation>(),
            Err(Error::UnknownRepresentation(s)) if s == "word128"
        ));
    }

    #[test]
    fn only_integer_words_are_words() {
        let words: Vec<_> = MachineRepresentation::ALL
            .into_iter()
            .filter(|rep| rep.is_word())
            .collect();
        assert_eq!(words.len(), 4);
        assert!(!MachineRepresentation::Tagged.is_word());
        assert!(!MachineRepresentation::Float64.is_word());
    }

    #[test]
    fn write_barrier_defaults_to_none() {
        assert_eq!(WriteBarrierKind::default(), WriteBarrierKind::NoWriteBarrier);
        assert_eq!("full".parse::<WriteBarrierKind>(), Ok(WriteBarrierKind::FullWriteBarrier));
        assert!("partial".parse::<WriteBarrierKind>().is_err());
    }

    #[test]
    fn store_representation_equality_is_structural() {
        let a = StoreRepresentation::new(
            MachineRepresentation::Tagged,
            WriteBarrierKind::FullWriteBarrier,
        );
        let b = StoreRepresentation::new(
            MachineRepresentation::Tagged,
            WriteBarrierKind::FullWriteBarrier,
        );
        let c = StoreRepresentation::new(
            MachineRepresentation::Tagged,
            WriteBarrierKind::NoWriteBarrier,
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "tagged+full");
    }
}
