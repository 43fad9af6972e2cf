//! Drives padding, block parsing and the compression function.

use crate::crypto::MerkleDamgard;
use crate::error::{HashError, HashResult};
use crate::pad::{pad, parse_blocks, Block};

/// Input accepted by the hash engine
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Message<'a> {
    /// Raw bytes, hashed as they are
    Bytes(&'a [u8]),
    /// Text, encoded with one byte per character
    Text(&'a str),
}

impl Message<'_> {
    /// Encode the message into the bytes that get hashed.
    ///
    /// Text must be ASCII; anything else is refused rather than silently
    /// widened to multiple bytes per character.
    /// ```
    /// use md_forge::Message;
    /// assert_eq!(Message::from("abc").to_bytes().unwrap(), b"abc");
    /// assert!(Message::from("naïve").to_bytes().is_err());
    /// ```
    pub fn to_bytes(&self) -> HashResult<Vec<u8>> {
        match *self {
            Self::Bytes(bytes) => Ok(bytes.to_vec()),
            Self::Text(text) => text
                .chars()
                .enumerate()
                .map(|(position, character)| {
                    if character.is_ascii() {
                        Ok(character as u8)
                    } else {
                        Err(HashError::InvalidInputType {
                            character,
                            position,
                        })
                    }
                })
                .collect(),
        }
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

/// Compress already padded blocks into `state`, returning the new state
pub fn absorb<H: MerkleDamgard>(mut state: H::State, blocks: &[Block]) -> H::State {
    for (index, block) in blocks.iter().enumerate() {
        H::compress(&mut state, block);
        log::trace!("{} block {index}: {state:08x?}", H::NAME);
    }
    state
}

/// Hash `message` from the algorithm's initial state
/// ```
/// use md_forge::{digest, Md5, Sha256};
/// use md_forge::encoding::Encodable;
/// assert_eq!(
///     digest::<Md5>("").unwrap().encode_hex(),
///     "d41d8cd98f00b204e9800998ecf8427e"
/// );
/// assert_eq!(
///     digest::<Sha256>(b"").unwrap().encode_hex(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn digest<'a, H: MerkleDamgard>(message: impl Into<Message<'a>>) -> HashResult<H::Digest> {
    digest_with::<H>(message, H::initial_state(), None)
}

/// Hash `message` starting from `initial_state`.
///
/// `length_override` replaces the bit length written into the padding. Both
/// parameters exist so a computation can be resumed from a published digest;
/// [`digest`] covers normal use.
pub fn digest_with<'a, H: MerkleDamgard>(
    message: impl Into<Message<'a>>,
    initial_state: H::State,
    length_override: Option<u64>,
) -> HashResult<H::Digest> {
    let bytes = message.into().to_bytes()?;
    let padded = pad(&bytes, length_override, H::LENGTH_ORDER)?;
    let blocks = parse_blocks(&padded)?;
    log::debug!(
        "{}: hashing {} bytes as {} blocks",
        H::NAME,
        bytes.len(),
        blocks.len()
    );
    Ok(absorb::<H>(initial_state, &blocks).into())
}
