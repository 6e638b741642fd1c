/*
    Checksum of BIP-0039 entropy.

    The checksum is the first ENT / 32 bits of SHA256(entropy):
        128 bits = 4 bit checksum  = 12 words
        160 bits = 5 bit checksum  = 15 words
        192 bits = 6 bit checksum  = 18 words
        224 bits = 7 bit checksum  = 21 words
        256 bits = 8 bit checksum  = 24 words
*/

use std::convert::TryFrom;

use crate::{
    bip39::bits::BitVector,
    entropy::{Entropy, EntropyBits},
    hash,
    Result
};

/**
    Returns the entropy bits followed by its checksum bits.

    The checksum length is taken from the entropy size, not from
    the length of the vector being built.
*/
pub fn checksum(entropy: &Entropy) -> Result<BitVector> {
    let size = EntropyBits::try_from(entropy.bit_len())?;
    let digest = hash::sha256(entropy.as_bytes());

    let mut bits = BitVector::with_capacity(size.bits() + size.checksum_bits());
    bits.extend_from_bytes(entropy.as_bytes(), size.bits());
    bits.extend_from_bytes(&digest, size.checksum_bits());
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bip39Error;

    fn counting_bytes(n: u8) -> Entropy {
        Entropy::from_bytes(&(1..=n).collect::<Vec<u8>>())
    }

    #[test]
    fn checksum_lengths() {
        for (n, expected) in [(16, 132), (20, 165), (24, 198), (28, 231), (32, 264)].iter() {
            let bits = checksum(&counting_bytes(*n)).unwrap();
            assert_eq!(bits.len(), *expected);
            assert_eq!(bits.len() % 11, 0);
        }
    }

    #[test]
    fn checksum_rejects_bad_lengths() {
        for n in [0u8, 14, 18, 33].iter() {
            assert!(matches!(
                checksum(&counting_bytes(*n)),
                Err(Bip39Error::InvalidEntropyLength { .. })
            ));
        }
    }

    #[test]
    fn checksum_bits_follow_entropy() {
        //SHA256 of 16 zero bytes starts with 0x37 -> 4 bit checksum 0b0011
        let bits = checksum(&Entropy::from_bytes(&[0u8; 16])).unwrap();
        assert_eq!(bits.read_window(0, 32), Some(0));
        assert_eq!(bits.read_window(128, 4), Some(0b0011));

        //SHA256 of 32 0xff bytes starts with 0xaf -> 8 bit checksum
        let bits = checksum(&Entropy::from_bytes(&[0xff; 32])).unwrap();
        assert_eq!(bits.read_window(224, 32), Some(u32::MAX));
        assert_eq!(bits.read_window(256, 8), Some(0xaf));
    }
}
