//! Length extension against `H(secret || message)`.
//!
//! A Merkle-Damgård digest is the whole chaining state. Knowing it and the
//! length of what was hashed is enough to keep hashing as if the victim had
//! gone on to process more blocks: the attacker resumes from the digest,
//! claims the full length in the final padding, and never needs the secret.

use std::fmt;

use crate::crypto::engine::digest_with;
use crate::crypto::MerkleDamgard;
use crate::error::{HashError, HashResult};
use crate::pad::{bit_length, padded_len, padding};

/// A forged message and the digest the victim will compute for it
pub struct Forgery<H: MerkleDamgard> {
    /// `known_message || glue padding || extension`, without the secret
    pub message: Vec<u8>,
    pub digest: H::Digest,
}

impl<H: MerkleDamgard> fmt::Debug for Forgery<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forgery")
            .field("message", &self.message)
            .field("digest", &self.digest)
            .finish()
    }
}

/// Bit length the victim's padding encodes for
/// `prior || glue padding || extension`, where `prior` is `prior_len` bytes
/// ```
/// use md_forge::crypto::extension::forged_bit_length;
/// assert_eq!(forged_bit_length(6, 3).unwrap(), 512 + 24);
/// assert_eq!(forged_bit_length(64, 0).unwrap(), 1024);
/// ```
pub fn forged_bit_length(prior_len: usize, extension_len: usize) -> HashResult<u64> {
    let glued_len = padded_len(prior_len)?;
    let total = glued_len
        .checked_add(extension_len)
        .ok_or(HashError::MessageTooLong { len: glued_len })?;
    bit_length(total)
}

/// The padding the victim appended after its `prior_len` byte input
pub fn glue_padding<H: MerkleDamgard>(prior_len: usize) -> HashResult<Vec<u8>> {
    padding(prior_len, bit_length(prior_len)?, H::LENGTH_ORDER)
}

/// Continue hashing from `digest` over `extension`.
///
/// `prior_len` is the byte length of everything the victim hashed to produce
/// `digest`, secret included. Only `padded_len(prior_len)` enters the result,
/// so a wrong guess within the same 64 byte bucket still gives the right
/// digest; it is the glue padding built by [`forge`] that is then wrong.
/// A guess in another bucket gives a digest that simply does not match.
pub fn extend<H: MerkleDamgard>(
    digest: H::Digest,
    prior_len: usize,
    extension: impl AsRef<[u8]>,
) -> HashResult<H::Digest> {
    let extension = extension.as_ref();
    let state: H::State = digest.into();
    let forged_len = forged_bit_length(prior_len, extension.len())?;
    log::debug!(
        "{}: extending {prior_len} byte input by {} bytes, claiming {forged_len} bits",
        H::NAME,
        extension.len()
    );
    digest_with::<H>(extension, state, Some(forged_len))
}

/// Build a complete forgery for a message signed with a `secret_len` byte
/// secret prefix.
pub fn forge<H: MerkleDamgard>(
    digest: H::Digest,
    secret_len: usize,
    known_message: impl AsRef<[u8]>,
    extension: impl AsRef<[u8]>,
) -> HashResult<Forgery<H>> {
    let known_message = known_message.as_ref();
    let extension = extension.as_ref();
    let prior_len = secret_len
        .checked_add(known_message.len())
        .ok_or(HashError::MessageTooLong { len: secret_len })?;

    let mut message = known_message.to_vec();
    message.extend(glue_padding::<H>(prior_len)?);
    message.extend_from_slice(extension);

    Ok(Forgery {
        message,
        digest: extend::<H>(digest, prior_len, extension)?,
    })
}
