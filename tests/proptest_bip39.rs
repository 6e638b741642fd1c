use proptest::prelude::*;

use btc_mnemonic::prelude::{
    decode_02x, encode_02x, entropy_to_hex, generate_mnemonics, hex_to_entropy, hex_to_seed,
    mnemonic_list_to_seed, seed_to_hex, Entropy, Language, WordlistRegistry,
};

fn valid_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|n| prop::collection::vec(any::<u8>(), n))
}

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn word_count_follows_entropy_size(bytes in valid_entropy(), lang in any_language()) {
        let r = WordlistRegistry::bundled().unwrap();
        let bits = bytes.len() * 8;
        let words = generate_mnemonics(&Entropy::from_bytes(&bytes), &r, lang).unwrap();
        prop_assert_eq!(words.len(), (bits + bits / 32) / 11);
    }

    #[test]
    fn encoding_is_deterministic(bytes in valid_entropy(), lang in any_language()) {
        let r = WordlistRegistry::bundled().unwrap();
        let entropy = Entropy::from_bytes(&bytes);
        let first = generate_mnemonics(&entropy, &r, lang).unwrap();
        let second = generate_mnemonics(&entropy, &r, lang).unwrap();
        prop_assert_eq!(first.join_words(), second.join_words());
    }

    #[test]
    fn every_word_maps_back_to_its_window(bytes in valid_entropy()) {
        let r = WordlistRegistry::bundled().unwrap();
        let entropy = Entropy::from_bytes(&bytes);
        let words = generate_mnemonics(&entropy, &r, Language::English).unwrap();
        let bits = btc_mnemonic::bip39::checksum(&entropy).unwrap();
        for (word, window) in words.iter().zip(bits.windows(11)) {
            prop_assert_eq!(r.index_of(Language::English, word.as_str()).unwrap(), window as usize);
        }
    }

    #[test]
    fn entropy_hex_round_trip(bytes in valid_entropy()) {
        let entropy = Entropy::from_bytes(&bytes);
        prop_assert_eq!(hex_to_entropy(&entropy_to_hex(&entropy)).unwrap(), entropy);
    }

    #[test]
    fn hex_decode_lowercases(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let upper = encode_02x(&bytes).to_uppercase();
        prop_assert_eq!(encode_02x(&decode_02x(&upper).unwrap()), upper.to_lowercase());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn seed_hex_round_trip(bytes in valid_entropy(), passphrase in ".{0,16}") {
        let r = WordlistRegistry::bundled().unwrap();
        let words = generate_mnemonics(&Entropy::from_bytes(&bytes), &r, Language::English).unwrap();
        let seed = mnemonic_list_to_seed(&words, &passphrase);
        prop_assert_eq!(hex_to_seed(&seed_to_hex(&seed)).unwrap(), seed);
    }
}
