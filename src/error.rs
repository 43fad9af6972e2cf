use thiserror::Error;

/// Errors raised by the hashing core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Text input contained a character that does not fit in a single byte.
    #[error("character {character:?} at position {position} cannot be encoded as a single byte")]
    InvalidInputType { character: char, position: usize },

    /// Padding produced a sequence that is not a whole number of blocks.
    #[error("padded message of {len} bytes is not a multiple of the 64 byte block size")]
    PaddingInvariantViolation { len: usize },

    /// The message bit length does not fit in the 64 bit length field.
    #[error("message of {len} bytes is too long for a 64 bit length field")]
    MessageTooLong { len: usize },

    /// A digest was rebuilt from a byte slice of the wrong size.
    #[error("expected a {expected} byte digest, got {actual} bytes")]
    DigestLength { expected: usize, actual: usize },
}

pub type HashResult<T> = Result<T, HashError>;
