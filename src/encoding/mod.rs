mod hex;

pub use hex::{parse_hex, to_hex, HexError};

/// Trait allowing us to use .encode_hex to encode bytes
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

impl<const N: usize> Encodable for [u8; N] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

/// Trait allowing us to use .decode_hex to decode strings
pub trait Decodable {
    fn decode_hex(&self) -> Result<Vec<u8>, HexError>;
}

impl Decodable for str {
    fn decode_hex(&self) -> Result<Vec<u8>, HexError> {
        parse_hex(self)
    }
}
