//! Byte containers and little-endian integers shared by every other schema type.

use byteorder::{ByteOrder, LE};
use ckbsdk_molecule::{Entity, NUMBER_SIZE, dynvec, fixed_bytes, fixvec, option, pack_number};

fixed_bytes!(Byte, ByteReader, ByteBuilder, 1);
fixed_bytes!(
    /// A 32-byte hash (transaction hash, script code hash, ...).
    Byte32,
    Byte32Reader,
    Byte32Builder,
    32
);
fixed_bytes!(Uint32, Uint32Reader, Uint32Builder, 4);
fixed_bytes!(Uint64, Uint64Reader, Uint64Builder, 8);
fixed_bytes!(
    /// A compressed secp256k1 public key.
    SEC1EncodedPubKey,
    SEC1EncodedPubKeyReader,
    SEC1EncodedPubKeyBuilder,
    33
);

fixvec!(
    /// Arbitrary bytes; [`Bytes::raw_data`] returns them without the length header.
    Bytes,
    BytesReader,
    BytesBuilder,
    Byte / ByteReader
);
option!(BytesOpt, BytesOptReader, BytesOptBuilder, Bytes / BytesReader);
dynvec!(BytesVec, BytesVecReader, BytesVecBuilder, Bytes / BytesReader);
fixvec!(Byte32Vec, Byte32VecReader, Byte32VecBuilder, Byte32 / Byte32Reader);

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Byte::from([value])
    }
}

impl Byte {
    pub fn unpack(&self) -> u8 {
        self.raw_data()[0]
    }
}

impl From<u32> for Uint32 {
    fn from(value: u32) -> Self {
        Uint32::from(value.to_le_bytes())
    }
}

impl Uint32 {
    pub fn unpack(&self) -> u32 {
        self.as_reader().unpack()
    }
}

impl Uint32Reader<'_> {
    pub fn unpack(&self) -> u32 {
        LE::read_u32(self.raw_data())
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Uint64::from(value.to_le_bytes())
    }
}

impl Uint64 {
    pub fn unpack(&self) -> u64 {
        self.as_reader().unpack()
    }
}

impl Uint64Reader<'_> {
    pub fn unpack(&self) -> u64 {
        LE::read_u64(self.raw_data())
    }
}

/// # Panics
///
/// Panics if `data` is longer than `u32::MAX` bytes.
impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        assert!(data.len() <= u32::MAX as usize, "Bytes longer than u32::MAX");
        let mut out = Vec::with_capacity(NUMBER_SIZE + data.len());
        out.extend_from_slice(&pack_number(data.len() as u32));
        out.extend_from_slice(data);
        Bytes::new_unchecked(out)
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Bytes::from(data.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use ckbsdk_molecule::{Entity, ErrorKind, Reader};

    use super::*;

    #[test]
    fn test_integers() {
        let n = Uint64::from(0x0102_0304_0506_0708u64);
        assert_eq!(n.as_slice(), &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(n.unpack(), 0x0102_0304_0506_0708);
        assert_eq!(Uint32::from(61u32).unpack(), 61);
        assert_eq!(Uint32::default().unpack(), 0);
        assert_eq!(Byte::from(2u8).unpack(), 2);
    }

    #[test]
    fn test_bytes() {
        let bytes = Bytes::from(&b"hello"[..]);
        assert_eq!(bytes.as_slice(), b"\x05\x00\x00\x00hello");
        assert_eq!(bytes.raw_data(), b"hello");
        assert_eq!(bytes.len(), 5);
        assert_eq!(bytes.get(1), Some(Byte::from(b'e')));
        assert_eq!(Bytes::from(b"hello".to_vec()), bytes);

        let reader = BytesReader::from_slice(bytes.as_slice()).unwrap();
        assert_eq!(reader.raw_data(), b"hello");
        assert!(matches!(
            Bytes::from_slice(&bytes.as_slice()[..8]).unwrap_err().kind(),
            ErrorKind::TotalSizeMismatch { .. }
        ));
    }

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(Byte32::default().as_slice(), &[0; 32]);
        assert_eq!(SEC1EncodedPubKey::SIZE, 33);
        assert!(SEC1EncodedPubKey::from_slice(&[2; 32]).is_err());
        let hashes: Byte32Vec = [Byte32::from([1; 32]), Byte32::from([2; 32])]
            .into_iter()
            .collect();
        assert_eq!(hashes.as_slice().len(), 4 + 64);
        assert_eq!(hashes.get(1).unwrap().to_array(), [2; 32]);
    }
}
