/*
    Library implementing the BIP-0039 standard:
    entropy -> mnemonic words -> 64 byte seed.

    Not for use with the bitcoin main network.

    References:
        - BIP-0039 (https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
            the algorithm, wordlists and test vectors

        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            chapter 5 for the general walkthrough of mnemonic generation

    The wordlists are supplied to the encoder through an explicitly built
    `WordlistRegistry`. Nothing in the crate holds global mutable state so
    every operation can be shared freely between threads.
*/

//Outward facing modules
pub mod bip39;
pub mod entropy;
pub mod error;
pub mod prelude;
pub mod util;

//Modules for internal use
mod hash;

pub use error::{Bip39Error, Result};

//Dependencies
use rand::rngs::OsRng;
use sha2::{Digest, Sha256, Sha512};
