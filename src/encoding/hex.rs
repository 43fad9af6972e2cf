use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex input must have an even length, got {0} characters")]
    OddLength(usize),
    #[error("unrecognised hex character {0:?}")]
    BadCharacter(char),
}

/// Parse an input string as hex
/// ```
/// use md_forge::encoding::parse_hex;
/// assert_eq!(parse_hex("1234").unwrap(), &[0x12, 0x34]);
/// assert_eq!(parse_hex("D41d").unwrap(), &[0xd4, 0x1d]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let input = input.as_bytes();
    if input.len() % 2 != 0 {
        return Err(HexError::OddLength(input.len()));
    }

    input
        .chunks_exact(2)
        .map(|pair| -> Result<u8, HexError> { Ok(h2b(pair[0])? << 4 | h2b(pair[1])?) })
        .collect()
}

/// Turn a slice of bytes into a lowercase hex encoded string
/// ```
/// use md_forge::encoding::{Encodable, to_hex};
/// assert_eq!(to_hex([0x12u8, 0x34, 0x56, 0x78]), "12345678");
/// assert_eq!([0xd4u8, 0x1d].encode_hex(), "d41d");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    input
        .as_ref()
        .iter()
        .flat_map(|&b| b2h(b))
        .map(char::from)
        .collect()
}

/// Convert a hex character to its value
fn h2b(b: u8) -> Result<u8, HexError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        x => Err(HexError::BadCharacter(x as char)),
    }
}

/// Convert a byte into the pair of characters representing its hex value
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}
