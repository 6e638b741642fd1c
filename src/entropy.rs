/*
    Entropy is the random secret a mnemonic phrase encodes.

    Valid entropy is 128, 160, 192, 224 or 256 bits long. Random
    entropy is always drawn from the operating system's secure RNG.
*/

use std::convert::TryFrom;
use std::fmt;

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::{
    bip39::{self, Language, Mnemonics, WordlistRegistry},
    util::{decode_02x, encode_02x},
    Bip39Error, OsRng, Result,
};

/**
    The five entropy sizes allowed by BIP-0039.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntropyBits {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropyBits {
    pub const ALL: [EntropyBits; 5] = [
        EntropyBits::Bits128,
        EntropyBits::Bits160,
        EntropyBits::Bits192,
        EntropyBits::Bits224,
        EntropyBits::Bits256,
    ];

    pub fn bits(&self) -> usize {
        match self {
            EntropyBits::Bits128 => 128,
            EntropyBits::Bits160 => 160,
            EntropyBits::Bits192 => 192,
            EntropyBits::Bits224 => 224,
            EntropyBits::Bits256 => 256,
        }
    }

    pub fn bytes(&self) -> usize {
        self.bits() / 8
    }

    /// ENT / 32
    pub fn checksum_bits(&self) -> usize {
        self.bits() / 32
    }

    /// (ENT + CS) / 11
    pub fn word_count(&self) -> usize {
        (self.bits() + self.checksum_bits()) / 11
    }
}

impl TryFrom<usize> for EntropyBits {
    type Error = Bip39Error;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(EntropyBits::Bits128),
            160 => Ok(EntropyBits::Bits160),
            192 => Ok(EntropyBits::Bits192),
            224 => Ok(EntropyBits::Bits224),
            256 => Ok(EntropyBits::Bits256),
            _ => Err(Bip39Error::InvalidEntropyLength { bits }),
        }
    }
}

/**
    Raw entropy bytes.

    `from_bytes` does not check the length, the size is validated when
    a checksum is computed over it. Use `new` to validate up front.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Wraps the bytes after checking they form a valid entropy size.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        EntropyBits::try_from(bytes.len() * 8)?;
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /**
        Generates `bits / 8` random bytes from the OS secure RNG.
    */
    pub fn generate(bits: usize) -> Result<Self> {
        Self::generate_with(bits, &mut OsRng)
    }

    /**
        Generates `bits / 8` random bytes from the given cryptographic RNG.
        A failure of the RNG is returned as `SecureRandomUnavailable`.
    */
    pub fn generate_with<R>(bits: usize, rng: &mut R) -> Result<Self>
    where R: RngCore + CryptoRng
    {
        let size = EntropyBits::try_from(bits)?;

        let mut bytes: Vec<u8> = vec![0; size.bytes()];
        if let Err(e) = rng.try_fill_bytes(&mut bytes) {
            warn!(bits, error = %e, "secure random source failed");
            return Err(Bip39Error::SecureRandomUnavailable(e));
        }

        debug!(bits, "generated random entropy");
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    pub fn to_hex(&self) -> EntropyHex {
        EntropyHex(encode_02x(&self.0))
    }

    /// Encodes the entropy into mnemonic words of the given language.
    pub fn generate_mnemonics(&self, registry: &WordlistRegistry, lang: Language) -> Result<Mnemonics> {
        bip39::generate_mnemonics(self, registry, lang)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(&self.0))
    }
}

//Entropy is secret material, keep it out of debug output
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
         .field("bits", &self.bit_len())
         .finish()
    }
}

/**
    Hex string view of an `Entropy`.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyHex(String);

impl EntropyHex {
    pub fn new<S: Into<String>>(hex: S) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the hex string back into entropy bytes.
    pub fn to_entropy(&self) -> Result<Entropy> {
        Ok(Entropy(decode_02x(&self.0)?))
    }
}

impl fmt::Display for EntropyHex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Error as RandError;

    /// RNG that always reports a failure of the underlying source.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 { 0 }
        fn next_u64(&mut self) -> u64 { 0 }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), RandError> {
            Err(RandError::new(std::io::Error::new(std::io::ErrorKind::Other, "no entropy")))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn generate_supported_sizes() {
        for size in EntropyBits::ALL.iter() {
            let e = Entropy::generate(size.bits()).unwrap();
            assert_eq!(e.as_bytes().len(), size.bits() / 8);
            assert_eq!(e.bit_len(), size.bits());
        }
    }

    #[test]
    fn generate_rejects_bad_sizes() {
        for bits in [0, 96, 127, 129, 136, 255, 257, 288].iter() {
            match Entropy::generate(*bits) {
                Err(Bip39Error::InvalidEntropyLength { bits: b }) => assert_eq!(b, *bits),
                _ => panic!("expected InvalidEntropyLength for {} bits", bits)
            }
        }
    }

    #[test]
    fn rng_failure_is_surfaced() {
        let r = Entropy::generate_with(128, &mut BrokenRng);
        assert!(matches!(r, Err(Bip39Error::SecureRandomUnavailable(_))));
    }

    #[test]
    fn entropy_sizes() {
        let expected = [(128, 4, 12), (160, 5, 15), (192, 6, 18), (224, 7, 21), (256, 8, 24)];
        for (size, (bits, cs, words)) in EntropyBits::ALL.iter().zip(expected.iter()) {
            assert_eq!(size.bits(), *bits);
            assert_eq!(size.checksum_bits(), *cs);
            assert_eq!(size.word_count(), *words);
        }
    }

    #[test]
    fn new_validates_length() {
        assert!(Entropy::new(vec![0; 16]).is_ok());
        assert!(Entropy::new(vec![0; 32]).is_ok());
        assert!(matches!(
            Entropy::new(vec![0; 18]),
            Err(Bip39Error::InvalidEntropyLength { bits: 144 })
        ));
    }

    #[test]
    fn display_matches_hex() {
        let e = Entropy::generate(256).unwrap();
        assert_eq!(e.to_string(), e.to_hex().to_string());
        assert_eq!(e.to_hex().to_entropy().unwrap(), e);
    }

    #[test]
    fn debug_hides_bytes() {
        let e = Entropy::from_bytes(&[0xab; 16]);
        assert_eq!(format!("{:?}", e), "Entropy { bits: 128 }");
    }
}
