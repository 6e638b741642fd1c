use crate::Result;

/*
    Decodes hex strings into a byte vector.
    Upper and lower case digits are both accepted.
*/
pub fn decode_02x(encoded: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(encoded)?)
}

/*
    Encodes byte slices into a lowercase hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bip39Error;

    #[test]
    fn hex_encode_is_lowercase_without_separators() {
        assert_eq!(encode_02x(&[0x0c, 0x1e, 0xAB, 0xff]), "0c1eabff");
        assert_eq!(encode_02x(&[]), "");
    }

    #[test]
    fn hex_decode_normalises_case() {
        let bytes = decode_02x("0C1EaBfF").unwrap();
        assert_eq!(bytes, vec![0x0c, 0x1e, 0xab, 0xff]);
        assert_eq!(encode_02x(&bytes), "0c1eabff");
    }

    #[test]
    fn hex_decode_rejects_malformed_input() {
        //Odd length
        assert!(matches!(
            decode_02x("000000000000000000000000000000000"),
            Err(Bip39Error::InvalidHexEncoding(hex::FromHexError::OddLength))
        ));

        //Non hex character
        assert!(matches!(
            decode_02x("0g"),
            Err(Bip39Error::InvalidHexEncoding(hex::FromHexError::InvalidHexCharacter { c: 'g', index: 1 }))
        ));
    }
}
