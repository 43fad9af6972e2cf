//! From-scratch SHA-256 and MD5, plus a length-extension attack against the
//! naive `H(secret || message)` MAC built from either of them.

pub mod constants;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod pad;

pub use crypto::engine::{absorb, digest, digest_with, Message};
pub use crypto::md5::{Md5, Md5Digest};
pub use crypto::sha2::{Sha256, Sha256Digest};
pub use crypto::MerkleDamgard;
pub use error::{HashError, HashResult};
pub use crypto::extension::{extend, forge, Forgery};
pub use crypto::mac::SecretPrefixMac;
