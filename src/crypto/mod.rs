pub mod engine;
pub mod extension;
pub mod mac;
pub mod md5;
pub mod sha2;

use std::fmt;

use crate::encoding::Encodable;
use crate::error::HashError;
use crate::pad::{Block, Endianness};

/// A Merkle-Damgård hash: a compression function chained over padded blocks.
///
/// Implementors are stateless markers. The chaining state is passed in and out
/// explicitly, which is what lets a computation resume from any digest.
pub trait MerkleDamgard {
    /// Chaining state carried between blocks
    type State: Copy + fmt::Debug + Eq;

    /// Serialised final state. Converting back into a [`Self::State`] is the
    /// first step of a length extension.
    type Digest: Copy
        + fmt::Debug
        + Eq
        + AsRef<[u8]>
        + Encodable
        + From<Self::State>
        + Into<Self::State>
        + for<'a> TryFrom<&'a [u8], Error = HashError>;

    const NAME: &'static str;

    /// Byte order of the length field and of the digest words
    const LENGTH_ORDER: Endianness;

    fn initial_state() -> Self::State;

    fn compress(state: &mut Self::State, block: &Block);
}

/// Define a digest newtype holding `$words` chaining words serialised in
/// `$order` byte order.
macro_rules! impl_digest {
    ($name:ident, words = $words:literal, order = $order:ident) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $name(pub [u8; $words * 4]);

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl $crate::encoding::Encodable for $name {
            fn encode_hex(&self) -> String {
                $crate::encoding::to_hex(self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::encoding::to_hex(self.0))
            }
        }

        impl From<[u32; $words]> for $name {
            fn from(state: [u32; $words]) -> Self {
                let mut bytes = [0; $words * 4];
                for (chunk, word) in bytes.chunks_exact_mut(4).zip(state) {
                    chunk.copy_from_slice(&$crate::pad::Endianness::$order.u32_bytes(word));
                }
                Self(bytes)
            }
        }

        impl From<$name> for [u32; $words] {
            fn from($name(bytes): $name) -> Self {
                let mut state = [0; $words];
                for (word, chunk) in state.iter_mut().zip(bytes.chunks_exact(4)) {
                    *word = $crate::pad::Endianness::$order
                        .read_u32([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                state
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::error::HashError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $words * 4]>::try_from(bytes).map(Self).map_err(|_| {
                    $crate::error::HashError::DigestLength {
                        expected: $words * 4,
                        actual: bytes.len(),
                    }
                })
            }
        }
    };
}
pub(crate) use impl_digest;
