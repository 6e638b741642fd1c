/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_mnemonic::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    bip39::{
        Language,
        Mnemonic,
        Mnemonics,
        Seed,
        SeedHex,
        WordlistRegistry,
        generate_entropy,
        generate_mnemonics,
        mnemonic_list_to_seed,
        join_words,
        entropy_to_hex,
        hex_to_entropy,
        seed_to_hex,
        hex_to_seed
    },

    entropy::{
        Entropy,
        EntropyBits,
        EntropyHex
    },

    error::{
        Bip39Error,
        Result
    },

    util::{
        encode_02x,
        decode_02x
    }

};
