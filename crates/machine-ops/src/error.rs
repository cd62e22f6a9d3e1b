use crate::machine::MachineRepresentation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("word width must be word32 or word64, got {0}")]
    InvalidWordWidth(MachineRepresentation),

    #[error("Unknown machine representation: {0}")]
    UnknownRepresentation(String),

    #[error("Unknown write barrier kind: {0}")]
    UnknownWriteBarrier(String),

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),

    #[error("{0} takes a parameter and cannot be built without one")]
    ParameterRequired(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
