//! The naive secret-prefix MAC, `H(key || message)`.
//!
//! It authenticates nothing against a Merkle-Damgård hash, see
//! [`crate::crypto::extension`].

use std::fmt;
use std::marker::PhantomData;

use crate::crypto::engine::digest;
use crate::crypto::MerkleDamgard;
use crate::error::HashResult;

pub struct SecretPrefixMac<H: MerkleDamgard> {
    key: Vec<u8>,
    _h: PhantomData<H>,
}

impl<H: MerkleDamgard> fmt::Debug for SecretPrefixMac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretPrefixMac")
            .field("algorithm", &H::NAME)
            .field("key_len", &self.key.len())
            .finish()
    }
}

impl<H: MerkleDamgard> SecretPrefixMac<H> {
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: key.as_ref().to_vec(),
            _h: PhantomData,
        }
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Tag `message`
    /// ```
    /// use md_forge::crypto::mac::SecretPrefixMac;
    /// use md_forge::{digest, Sha256};
    /// let mac = SecretPrefixMac::<Sha256>::new("s");
    /// assert_eq!(mac.sign("hello").unwrap(), digest::<Sha256>("shello").unwrap());
    /// ```
    pub fn sign(&self, message: impl AsRef<[u8]>) -> HashResult<H::Digest> {
        let keyed = [&self.key[..], message.as_ref()].concat();
        digest::<H>(&keyed)
    }

    pub fn verify(&self, message: impl AsRef<[u8]>, tag: &H::Digest) -> HashResult<bool> {
        Ok(self.sign(message)? == *tag)
    }
}
