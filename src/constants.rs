//! Round constants and initial values, derived rather than pasted.
//!
//! SHA-256 takes its constants from the fractional parts of square and cube
//! roots of the first primes. Those are computed exactly with integer roots:
//! `floor(cbrt(p) * 2^32) == floor(cbrt(p * 2^96))`, and the low 32 bits of that
//! are the fractional part scaled by `2^32`.

use num_integer::Roots;
use once_cell::sync::Lazy;

/// SHA-256 round constants `K`.
pub static SHA256_K: Lazy<[u32; 64]> = Lazy::new(sha256_round_constants);

/// SHA-256 initial hash value `H(0)`.
pub static SHA256_H: Lazy<[u32; 8]> = Lazy::new(sha256_initial_hash);

/// MD5 sine table `T`.
pub static MD5_T: Lazy<[u32; 64]> = Lazy::new(md5_sine_constants);

/// MD5 initial chaining words A, B, C and D.
pub const MD5_INITIAL: [u32; 4] = [
    u32::from_le_bytes([0x01, 0x23, 0x45, 0x67]),
    u32::from_le_bytes([0x89, 0xab, 0xcd, 0xef]),
    u32::from_le_bytes([0xfe, 0xdc, 0xba, 0x98]),
    u32::from_le_bytes([0x76, 0x54, 0x32, 0x10]),
];

/// Trial division primality test
/// ```
/// use md_forge::constants::is_prime;
/// assert!(is_prime(311));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => (3..)
            .step_by(2)
            .take_while(|d| d * d <= n)
            .all(|d| n % d != 0),
    }
}

/// Iterate over the primes in ascending order
pub fn primes() -> impl Iterator<Item = u64> {
    (2..).filter(|&n| is_prime(n))
}

/// Return the n-th prime, counting from one
/// ```
/// use md_forge::constants::nth_prime;
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(64), Some(311));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    n.checked_sub(1).and_then(|i| primes().nth(i))
}

/// First 32 bits of the fractional part of `prime^(1/degree)`.
fn fractional_root_bits(prime: u64, degree: u32) -> u32 {
    let scaled = (prime as u128) << (32 * degree);
    let root = match degree {
        2 => Roots::sqrt(&scaled),
        3 => Roots::cbrt(&scaled),
        _ => Roots::nth_root(&scaled, degree),
    };
    // the integer part sits above bit 32, truncation drops it
    root as u32
}

/// Cube roots of the first 64 primes
pub fn sha256_round_constants() -> [u32; 64] {
    let mut k = [0; 64];
    for (word, prime) in k.iter_mut().zip(primes()) {
        *word = fractional_root_bits(prime, 3);
    }
    k
}

/// Square roots of the first 8 primes
pub fn sha256_initial_hash() -> [u32; 8] {
    let mut h = [0; 8];
    for (word, prime) in h.iter_mut().zip(primes()) {
        *word = fractional_root_bits(prime, 2);
    }
    h
}

/// `floor(|sin(i + 1)| * 2^32)` as defined in RFC 1321 section 3.4
pub fn md5_sine_constants() -> [u32; 64] {
    let mut t = [0; 64];
    for (i, word) in t.iter_mut().enumerate() {
        *word = (((i + 1) as f64).sin().abs() * 4294967296.0) as u32;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes() {
        let first: Vec<u64> = primes().take(10).collect();
        assert_eq!(first, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_nth_prime_matches_iterator() {
        for (n, p) in primes().take(64).enumerate() {
            assert_eq!(nth_prime(n + 1), Some(p));
        }
    }

    #[test]
    fn test_nth_prime_counts_from_one() {
        assert_eq!(nth_prime(0), None);
        assert_eq!(nth_prime(8), Some(19));
    }

    #[test]
    fn test_is_prime_rejects_squares() {
        for n in [4, 9, 25, 49, 121, 169, 289, 961] {
            assert!(!is_prime(n), "{n} is a square");
        }
    }

    // FIPS 180-4 section 4.2.2
    #[test]
    fn test_sha256_round_constants() {
        #[rustfmt::skip]
        const K: [u32; 64] = [
            0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
            0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
            0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
            0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
            0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
            0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
            0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
            0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
        ];
        assert_eq!(sha256_round_constants(), K);
        assert_eq!(*SHA256_K, K);
    }

    // FIPS 180-4 section 5.3.3
    #[test]
    fn test_sha256_initial_hash() {
        assert_eq!(
            sha256_initial_hash(),
            [
                0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
                0x5be0cd19
            ]
        );
    }

    // RFC 1321 section 3.4
    #[test]
    fn test_md5_sine_constants() {
        #[rustfmt::skip]
        const T: [u32; 64] = [
            0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
            0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
            0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
            0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
            0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
            0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
            0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
            0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
        ];
        assert_eq!(md5_sine_constants(), T);
        assert_eq!(*MD5_T, T);
    }

    #[test]
    fn test_md5_initial_words() {
        assert_eq!(MD5_INITIAL, [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476]);
    }
}
