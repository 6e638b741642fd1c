/*
    Seed derivation.

    seed = PBKDF2(HMAC-SHA512, password = words joined by spaces,
                  salt = "mnemonic" || passphrase, 2048 rounds, 64 bytes)
*/

use std::convert::TryInto;
use std::fmt;

use crate::{
    bip39::mnemonic::Mnemonics,
    hash,
    util::{decode_02x, encode_02x},
    Bip39Error, Result
};

pub const SEED_LEN: usize = 64;
const SALT_PREFIX: &str = "mnemonic";
const PBKDF2_ROUNDS: u32 = 2048;

/**
    64 byte seed used as the root of an HD wallet.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> SeedHex {
        SeedHex(encode_02x(&self.0))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(&self.0))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/**
    Hex string view of a `Seed`.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedHex(String);

impl SeedHex {
    pub fn new<S: Into<String>>(hex: S) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the hex string, which must hold exactly 64 bytes.
    pub fn to_seed(&self) -> Result<Seed> {
        let bytes: [u8; SEED_LEN] = decode_02x(&self.0)?
            .try_into()
            .map_err(|_| Bip39Error::InvalidHexEncoding(hex::FromHexError::InvalidStringLength))?;
        Ok(Seed(bytes))
    }
}

impl fmt::Display for SeedHex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/**
    Derives the seed from the mnemonic words and a passphrase.
    Any passphrase, including the empty one, is valid.
*/
pub fn mnemonic_list_to_seed(mnemonics: &Mnemonics, passphrase: &str) -> Seed {
    let password = mnemonics.join_words();
    let salt = format!("{}{}", SALT_PREFIX, passphrase);
    Seed(hash::pbkdf2_hmac_sha512(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandon_about() -> Mnemonics {
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
            .split(' ')
            .collect()
    }

    #[test]
    fn seed_without_passphrase() {
        let seed = mnemonic_list_to_seed(&abandon_about(), "");
        assert_eq!(
            seed.to_string(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn seed_with_passphrase() {
        let seed = abandon_about().generate_seed("TREZOR");
        assert_eq!(
            seed.to_hex().as_str(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
        assert_ne!(seed, abandon_about().generate_seed(""));
    }

    #[test]
    fn seed_hex_round_trip() {
        let seed = abandon_about().generate_seed("");
        let back = seed.to_hex().to_seed().unwrap();
        assert_eq!(back, seed);
        assert_eq!(back.to_string(), seed.to_string());
    }

    #[test]
    fn seed_hex_wrong_length() {
        assert!(matches!(
            SeedHex::new("00ff").to_seed(),
            Err(Bip39Error::InvalidHexEncoding(hex::FromHexError::InvalidStringLength))
        ));
        assert!(matches!(
            SeedHex::new("0").to_seed(),
            Err(Bip39Error::InvalidHexEncoding(hex::FromHexError::OddLength))
        ));
    }
}
