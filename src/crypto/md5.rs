//! Md5 [RFC 1321](https://datatracker.ietf.org/doc/html/rfc1321) implementation

use crate::constants::{MD5_INITIAL, MD5_T};
use crate::crypto::{impl_digest, MerkleDamgard};
use crate::pad::{Block, Endianness};

#[derive(Debug, Copy, Clone, Default)]
pub struct Md5;

impl_digest!(Md5Digest, words = 4, order = Little);

/// One of the four MD5 rounds.
///
/// Round `r` also uses `T[16 * r..16 * (r + 1)]` from the sine table.
struct Round {
    /// Nonlinear mixing function of B, C and D
    function: fn(u32, u32, u32) -> u32,
    /// Block word consumed at each step
    word_order: [usize; 16],
    /// Left rotation amounts, cycled by step index
    shifts: [u32; 4],
}

fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

#[rustfmt::skip]
static ROUNDS: [Round; 4] = [
    Round {
        function: f,
        word_order: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        shifts: [7, 12, 17, 22],
    },
    Round {
        function: g,
        word_order: [1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12],
        shifts: [5, 9, 14, 20],
    },
    Round {
        function: h,
        word_order: [5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2],
        shifts: [4, 11, 16, 23],
    },
    Round {
        function: i,
        word_order: [0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9],
        shifts: [6, 10, 15, 21],
    },
];

/// Run the four rounds over `block` and fold the result into `state`
pub fn compress(state: &mut [u32; 4], block: &Block) {
    let x = Endianness::Little.block_words(block);
    let t = &*MD5_T;

    let [mut a, mut b, mut c, mut d] = *state;

    for (round, constants) in ROUNDS.iter().zip(t.chunks_exact(16)) {
        for (step, (&k, &sine)) in round.word_order.iter().zip(constants).enumerate() {
            let mixed = a
                .wrapping_add((round.function)(b, c, d))
                .wrapping_add(x[k])
                .wrapping_add(sine);
            let result = b.wrapping_add(mixed.rotate_left(round.shifts[step % 4]));
            (a, b, c, d) = (d, result, b, c);
        }
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d]) {
        *word = word.wrapping_add(working);
    }
}

impl MerkleDamgard for Md5 {
    type State = [u32; 4];
    type Digest = Md5Digest;

    const NAME: &'static str = "md5";
    const LENGTH_ORDER: Endianness = Endianness::Little;

    fn initial_state() -> Self::State {
        MD5_INITIAL
    }

    fn compress(state: &mut Self::State, block: &Block) {
        compress(state, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::engine::digest;
    use crate::encoding::Encodable;

    // test vectors from https://www.rfc-editor.org/rfc/rfc1321
    #[test]
    fn test_md5_rfc_vectors() {
        let test_vectors = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "c3fcd3d76192e4007dfb496cca67e13b",
            ),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];
        for (test, correct) in test_vectors {
            let hash = digest::<Md5>(test).unwrap();
            assert_eq!(hash.encode_hex(), correct);
        }
    }

    #[test]
    fn test_md5_quick_brown_fox() {
        let hash = digest::<Md5>("The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(hash.encode_hex(), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_md5_to_from_digest() {
        let hash = digest::<Md5>("Wow this string sure isn't very long.").unwrap();
        let state: [u32; 4] = hash.into();
        assert_eq!(Md5Digest::from(state), hash);
    }

    #[test]
    fn test_md5_digest_is_le() {
        let digest: Md5Digest = [1u32, 2, 3, 4].into();
        let repr = [1u32, 2, 3, 4].map(u32::to_le_bytes).concat();
        assert_eq!(&digest.0[..], &repr[..]);
    }

    #[test]
    fn test_md5_empty_state() {
        let hash = digest::<Md5>("").unwrap();
        let state: [u32; 4] = hash.into();
        assert_eq!(state, [0xd98c1dd4, 0x04b2008f, 0x980980e9, 0x7e42f8ec]);
    }

    #[test]
    fn test_round_word_orders_are_permutations() {
        for round in &ROUNDS {
            let mut seen = [false; 16];
            for &k in &round.word_order {
                seen[k] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}
