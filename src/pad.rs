use crate::error::{HashError, HashResult};

/// Size of one Merkle-Damgård block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Bytes taken up by the trailing length field
const LENGTH_FIELD_SIZE: usize = 8;

/// One 512 bit block of padded message
pub type Block = [u8; BLOCK_SIZE];

/// Byte order used when serialising words and the length field
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn u64_bytes(self, value: u64) -> [u8; 8] {
        match self {
            Self::Big => value.to_be_bytes(),
            Self::Little => value.to_le_bytes(),
        }
    }

    pub fn u32_bytes(self, word: u32) -> [u8; 4] {
        match self {
            Self::Big => word.to_be_bytes(),
            Self::Little => word.to_le_bytes(),
        }
    }

    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Big => u32::from_be_bytes(bytes),
            Self::Little => u32::from_le_bytes(bytes),
        }
    }

    /// Read a block as sixteen 32 bit words
    pub fn block_words(self, block: &Block) -> [u32; 16] {
        let mut words = [0; 16];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = self.read_u32([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

/// Length in bits of a message of `len` bytes
pub fn bit_length(len: usize) -> HashResult<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|l| l.checked_mul(8))
        .ok_or(HashError::MessageTooLong { len })
}

/// Length in bytes of a `len` byte message after padding
/// ```
/// use md_forge::pad::padded_len;
/// assert_eq!(padded_len(0).unwrap(), 64);
/// assert_eq!(padded_len(55).unwrap(), 64);
/// assert_eq!(padded_len(56).unwrap(), 128);
/// assert_eq!(padded_len(64).unwrap(), 128);
/// assert!(padded_len(usize::MAX).is_err());
/// ```
pub fn padded_len(len: usize) -> HashResult<usize> {
    len.checked_add(1 + LENGTH_FIELD_SIZE)
        .and_then(|l| l.div_ceil(BLOCK_SIZE).checked_mul(BLOCK_SIZE))
        .ok_or(HashError::MessageTooLong { len })
}

/// The bytes appended to a `message_len` byte message: the 1 bit, the zero
/// fill and the length field holding `bit_length`.
pub fn padding(message_len: usize, bit_length: u64, order: Endianness) -> HashResult<Vec<u8>> {
    let fill = padded_len(message_len)? - message_len - 1 - LENGTH_FIELD_SIZE;
    let mut out = Vec::with_capacity(fill + 1 + LENGTH_FIELD_SIZE);
    out.push(0x80);
    out.resize(fill + 1, 0x00);
    out.extend_from_slice(&order.u64_bytes(bit_length));
    Ok(out)
}

/// Apply Merkle-Damgård strengthening to `message`.
///
/// The length field holds `8 * message.len()` unless `bit_length` is given,
/// which lets a caller claim a longer message than the bytes passed in.
pub fn pad(
    message: impl AsRef<[u8]>,
    bit_length: Option<u64>,
    order: Endianness,
) -> HashResult<Vec<u8>> {
    let message = message.as_ref();
    let bits = match bit_length {
        Some(bits) => bits,
        None => self::bit_length(message.len())?,
    };

    let mut out = Vec::with_capacity(padded_len(message.len())?);
    out.extend_from_slice(message);
    out.extend(padding(message.len(), bits, order)?);

    if out.len() % BLOCK_SIZE != 0 {
        log::error!("padding produced {} bytes", out.len());
        return Err(HashError::PaddingInvariantViolation { len: out.len() });
    }

    log::debug!(
        "padded {} bytes to {} ({} bit length field)",
        message.len(),
        out.len(),
        bits
    );
    Ok(out)
}

/// Split a padded message into its blocks
pub fn parse_blocks(padded: &[u8]) -> HashResult<Vec<Block>> {
    let chunks = padded.chunks_exact(BLOCK_SIZE);
    if !chunks.remainder().is_empty() {
        return Err(HashError::PaddingInvariantViolation { len: padded.len() });
    }

    Ok(chunks
        .map(|chunk| {
            let mut block = [0; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            block
        })
        .collect())
}
