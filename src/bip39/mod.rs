/*
    This module implements the BIP-39 standard
    for mnemonic phrases.

        entropy -> checksum -> 11 bit windows -> words -> seed

    Not for use with the bitcoin main network.
*/

mod bits;
mod checksum;
pub mod lang;
mod mnemonic;
mod seed;

pub use bits::{BitVector, Windows};
pub use checksum::checksum;
pub use lang::{Language, RegistryBuilder, WordlistRegistry, WORDLIST_LEN};
pub use mnemonic::{encode, Mnemonic, Mnemonics};
pub use seed::{Seed, SeedHex, SEED_LEN};

use crate::{
    entropy::{Entropy, EntropyHex},
    Result
};

/// Random entropy of `bits` length from the OS secure RNG.
pub fn generate_entropy(bits: usize) -> Result<Entropy> {
    Entropy::generate(bits)
}

/// Mnemonic words for `entropy` in the given language.
pub fn generate_mnemonics(entropy: &Entropy, registry: &WordlistRegistry, lang: Language) -> Result<Mnemonics> {
    mnemonic::encode(entropy, registry, lang)
}

pub fn mnemonic_list_to_seed(mnemonics: &Mnemonics, passphrase: &str) -> Seed {
    seed::mnemonic_list_to_seed(mnemonics, passphrase)
}

pub fn join_words(mnemonics: &Mnemonics) -> String {
    mnemonics.join_words()
}

pub fn entropy_to_hex(entropy: &Entropy) -> String {
    entropy.to_string()
}

/// Decodes hex into entropy. The length is checked when the entropy is encoded.
pub fn hex_to_entropy(hex: &str) -> Result<Entropy> {
    EntropyHex::new(hex).to_entropy()
}

pub fn seed_to_hex(seed: &Seed) -> String {
    seed.to_string()
}

pub fn hex_to_seed(hex: &str) -> Result<Seed> {
    SeedHex::new(hex).to_seed()
}
