use btc_mnemonic::prelude::*;

//Vectors from https://github.com/trezor/python-mnemonic/blob/master/vectors.json
//(entropy, mnemonic, seed with passphrase "TREZOR")
const TREZOR_VECTORS: [(&str, &str, &str); 6] = [
    (
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
        "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"
    ),
    (
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8"
    ),
    (
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028"
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
        "0cd6e5d827bb62eb8fc1e262254223817fd068a74b5b449cc2f667c3f1f985a76379b43348d952e2265b4cd129090758b3e3c2c49103b5051aac2eaeb890a528"
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"
    )
];

fn registry() -> WordlistRegistry {
    WordlistRegistry::bundled().expect("bundled wordlists are valid")
}

#[test]
fn trezor_vectors() -> Result<()> {
    let r = registry();
    for (entropy_hex, phrase, seed_hex) in TREZOR_VECTORS.iter() {
        let entropy = hex_to_entropy(entropy_hex)?;
        let words = generate_mnemonics(&entropy, &r, Language::English)?;
        assert_eq!(join_words(&words), *phrase);

        let seed = mnemonic_list_to_seed(&words, "TREZOR");
        assert_eq!(seed_to_hex(&seed), *seed_hex);
        assert_eq!(hex_to_seed(seed_hex)?, seed);
    }
    Ok(())
}

#[test]
fn correct_mnemonics() -> Result<()> {
    let r = registry();

    //Odd length hex never reaches the encoder
    assert!(matches!(
        hex_to_entropy("000000000000000000000000000000000"),
        Err(Bip39Error::InvalidHexEncoding(_))
    ));

    let cases: [(&str, [&str; 12], &str); 3] = [
        (
            "00000000000000000000000000000000",
            ["abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "abandon", "about"],
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        ),
        (
            "ffffffffffffffffffffffffffffffff",
            ["zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "zoo", "wrong"],
            ""
        ),
        (
            "0c1e24e5917779d297e14d45f14e1a1a",
            ["army", "van", "defense", "carry", "jealous", "true", "garbage", "claim", "echo", "media", "make", "crunch"],
            "5b56c417303faa3fcba7e57400e120a0ca83ec5a4fc9ffba757fbe63fbd77a89a1a3be4c67196f57c39a88b76373733891bfaba16ed27a813ceed498804c0570"
        )
    ];

    for (entropy_hex, expected, seed_hex) in cases.iter() {
        let words = hex_to_entropy(entropy_hex)?.generate_mnemonics(&r, Language::English)?;
        let expected: Mnemonics = expected.iter().copied().collect();
        assert_eq!(words, expected);
        assert_eq!(words.to_string(), expected.to_string());

        //Seeds derived from generated and expected words agree
        let got = words.generate_seed("");
        let want = expected.generate_seed("");
        assert_eq!(got, want);
        assert_eq!(got.to_hex(), want.to_hex());
        if !seed_hex.is_empty() {
            assert_eq!(got.to_string(), *seed_hex);
        }

        let back = got.to_hex().to_seed()?;
        assert_eq!(back, got);
        assert_eq!(back.to_string(), got.to_string());
    }
    Ok(())
}

#[test]
fn generated_entropy_word_counts() -> Result<()> {
    let r = registry();
    for size in EntropyBits::ALL.iter() {
        let entropy = generate_entropy(size.bits())?;
        assert_eq!(entropy.as_bytes().len(), size.bits() / 8);

        let words = generate_mnemonics(&entropy, &r, Language::English)?;
        assert_eq!(words.len(), (size.bits() + size.bits() / 32) / 11);
        assert_eq!(entropy_to_hex(&entropy), entropy.to_hex().to_string());
    }
    Ok(())
}

#[test]
fn odd_and_out_of_range_bit_sizes() {
    for bits in [127usize, 129, 257, 0, 100].iter() {
        assert!(matches!(
            generate_entropy(*bits),
            Err(Bip39Error::InvalidEntropyLength { .. })
        ));
    }
}

#[test]
fn unsupported_language() {
    let r = WordlistRegistry::empty();
    let entropy = Entropy::from_bytes(&[0u8; 16]);
    assert!(matches!(
        generate_mnemonics(&entropy, &r, Language::English),
        Err(Bip39Error::UnsupportedLanguage(_))
    ));
    assert!(matches!(
        "german".parse::<Language>(),
        Err(Bip39Error::UnsupportedLanguage(_))
    ));
}

#[test]
fn registry_is_shared_between_threads() {
    use std::sync::Arc;

    let r = Arc::new(registry());
    let entropy = Entropy::from_bytes(&[0x7f; 16]);
    let expected = generate_mnemonics(&entropy, &r, Language::English).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = Arc::clone(&r);
            let entropy = entropy.clone();
            std::thread::spawn(move || generate_mnemonics(&entropy, &r, Language::English).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
