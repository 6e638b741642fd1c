use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

use tracing::debug;

use crate::{
    bip39::{
        checksum::checksum,
        lang::{Language, WordlistRegistry, WORDLIST_LEN},
        seed::{self, Seed}
    },
    entropy::Entropy,
    Bip39Error, Result
};

/// Bits per word index.
const WORD_BITS: usize = 11;

/**
    A single mnemonic word.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new<S: Into<String>>(word: S) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Mnemonic {
    fn from(word: &str) -> Self {
        Self(word.to_string())
    }
}

impl PartialEq<&str> for Mnemonic {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/**
    Ordered list of mnemonic words. The order is the order of the
    11 bit windows the words were resolved from.
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mnemonics(Vec<Mnemonic>);

impl Mnemonics {
    pub fn new(words: Vec<Mnemonic>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[Mnemonic] {
        &self.0
    }

    /// Words separated by a single ASCII space.
    pub fn join_words(&self) -> String {
        self.0
            .iter()
            .map(Mnemonic::as_str)
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Derives the wallet seed from these words and an optional passphrase.
    pub fn generate_seed(&self, passphrase: &str) -> Seed {
        seed::mnemonic_list_to_seed(self, passphrase)
    }
}

impl Deref for Mnemonics {
    type Target = [Mnemonic];

    fn deref(&self) -> &[Mnemonic] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Mnemonics {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|w| Mnemonic(w.into())).collect())
    }
}

impl fmt::Display for Mnemonics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.join_words())
    }
}

/**
    Encodes entropy into mnemonic words.

    The checksummed bit vector is split into consecutive 11 bit windows,
    each window read big-endian is an index into the language's wordlist.
    Word count:
        128 bits = 12 words
        160 bits = 15 words
        192 bits = 18 words
        224 bits = 21 words
        256 bits = 24 words
*/
pub fn encode(entropy: &Entropy, registry: &WordlistRegistry, lang: Language) -> Result<Mnemonics> {
    //Fail on the language before hashing anything
    if !registry.contains(lang) {
        return Err(Bip39Error::UnsupportedLanguage(lang.to_string()));
    }

    let bits = checksum(entropy)?;

    let mut words: Vec<Mnemonic> = Vec::with_capacity(bits.len() / WORD_BITS);
    for window in bits.windows(WORD_BITS) {
        let index = window as usize;
        if index >= WORDLIST_LEN {
            return Err(Bip39Error::WordIndexOutOfRange { index });
        }
        words.push(Mnemonic::from(registry.word_at(lang, index)?));
    }

    debug!(language = %lang, words = words.len(), "encoded mnemonic");
    Ok(Mnemonics(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropyHex;

    fn counting_bytes(n: u8) -> Entropy {
        Entropy::from_bytes(&(1..=n).collect::<Vec<u8>>())
    }

    #[test]
    fn word_counts() {
        let r = WordlistRegistry::bundled().unwrap();
        let cases = [
            (16, Language::English, 12),
            (20, Language::English, 15),
            (24, Language::English, 18),
            (28, Language::Spanish, 21),
            (32, Language::Spanish, 24)
        ];
        for (n, lang, count) in cases.iter() {
            assert_eq!(encode(&counting_bytes(*n), &r, *lang).unwrap().len(), *count);
        }
    }

    #[test]
    fn known_words() {
        let r = WordlistRegistry::bundled().unwrap();

        let e = EntropyHex::new("00000000000000000000000000000000").to_entropy().unwrap();
        let words = encode(&e, &r, Language::English).unwrap();
        assert_eq!(words.join_words(), "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about");

        let e = EntropyHex::new("ffffffffffffffffffffffffffffffff").to_entropy().unwrap();
        let words = encode(&e, &r, Language::English).unwrap();
        assert_eq!(words.to_string(), "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong");

        let e = EntropyHex::new("0c1e24e5917779d297e14d45f14e1a1a").to_entropy().unwrap();
        let words = encode(&e, &r, Language::English).unwrap();
        let expected = ["army", "van", "defense", "carry", "jealous", "true", "garbage", "claim", "echo", "media", "make", "crunch"];
        assert_eq!(words.len(), expected.len());
        for (w, x) in words.iter().zip(expected.iter()) {
            assert_eq!(w, x);
        }
    }

    #[test]
    fn invalid_entropy_length() {
        let r = WordlistRegistry::bundled().unwrap();
        //17 bytes decoded from a valid, even length hex string
        let e = EntropyHex::new("0000000000000000000000000000000000").to_entropy().unwrap();
        assert!(matches!(
            encode(&e, &r, Language::English),
            Err(Bip39Error::InvalidEntropyLength { bits: 136 })
        ));
    }

    #[test]
    fn unregistered_language() {
        let r = WordlistRegistry::builder()
            .register(Language::English, crate::bip39::lang::en::WORDS.iter().copied())
            .build()
            .unwrap();
        assert!(matches!(
            encode(&counting_bytes(16), &r, Language::Japanese),
            Err(Bip39Error::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn join_words_single_space() {
        let m: Mnemonics = vec!["a", "b", "c"].into_iter().collect();
        assert_eq!(m.join_words(), "a b c");
        assert_eq!(Mnemonics::default().join_words(), "");
        let one: Mnemonics = std::iter::once("solo").collect();
        assert_eq!(one.join_words(), "solo");
    }
}
