use anyhow::Result;
use proptest::prelude::*;

use md_forge::pad::{pad, padded_len, parse_blocks, Endianness, BLOCK_SIZE};
use md_forge::{digest, Md5, Sha256};

proptest! {
    #[test]
    fn padded_length_is_smallest_fitting_multiple(message in prop::collection::vec(any::<u8>(), 0..300)) {
        let padded = pad(&message, None, Endianness::Big).unwrap();
        prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        prop_assert!(padded.len() >= message.len() + 9);
        prop_assert!(padded.len() - BLOCK_SIZE < message.len() + 9);
        prop_assert_eq!(padded.len(), padded_len(message.len()).unwrap());
        prop_assert_eq!(&padded[..message.len()], &message[..]);
    }

    #[test]
    fn padded_message_parses_without_remainder(len in 0usize..300) {
        let padded = pad(vec![0xa5u8; len], None, Endianness::Little).unwrap();
        let blocks = parse_blocks(&padded).unwrap();
        prop_assert_eq!(blocks.len() * BLOCK_SIZE, padded.len());
    }
}

#[test]
fn one_short_of_a_block() -> Result<()> {
    let message = [b'a'; 63];
    let padded = pad(message, None, Endianness::Big)?;
    assert_eq!(padded.len(), 128);
    assert_eq!(parse_blocks(&padded)?.len(), 2);
    assert_eq!(&padded[120..], &504u64.to_be_bytes());

    Ok(())
}

#[test]
fn single_bit_flip_avalanche() -> Result<()> {
    let a = digest::<Sha256>("avalanche")?;
    let b = digest::<Sha256>("avalanchf")?;
    let differing: u32 = a.0.iter().zip(b.0).map(|(x, y)| (x ^ y).count_ones()).sum();
    assert!((64..=192).contains(&differing), "{differing} of 256 bits differ");

    let a = digest::<Md5>("avalanche")?;
    let b = digest::<Md5>("avalanchf")?;
    let differing: u32 = a.0.iter().zip(b.0).map(|(x, y)| (x ^ y).count_ones()).sum();
    assert!((32..=96).contains(&differing), "{differing} of 128 bits differ");

    Ok(())
}
