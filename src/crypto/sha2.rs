//! SHA-256 as specified in FIPS 180-4

use crate::constants::{SHA256_H, SHA256_K};
use crate::crypto::{impl_digest, MerkleDamgard};
use crate::pad::{Block, Endianness};

#[derive(Debug, Copy, Clone, Default)]
pub struct Sha256;

impl_digest!(Sha256Digest, words = 8, order = Big);

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64 word message schedule
pub fn message_schedule(block: &Block) -> [u32; 64] {
    let mut w = [0; 64];
    w[..16].copy_from_slice(&Endianness::Big.block_words(block));

    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

/// Run the 64 rounds over `block` and fold the result into `state`
pub fn compress(state: &mut [u32; 8], block: &Block) {
    let w = message_schedule(block);
    let k = &*SHA256_K;

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
        let t1 = h
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k[t])
            .wrapping_add(w[t]);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

impl MerkleDamgard for Sha256 {
    type State = [u32; 8];
    type Digest = Sha256Digest;

    const NAME: &'static str = "sha256";
    const LENGTH_ORDER: Endianness = Endianness::Big;

    fn initial_state() -> Self::State {
        *SHA256_H
    }

    fn compress(state: &mut Self::State, block: &Block) {
        compress(state, block)
    }
}
