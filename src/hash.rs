/*
    Hash module includes the hash functions needed to
    checksum entropy and stretch a mnemonic into a seed.
*/

use crate::{
    Digest, Sha256, Sha512
};

/*
    Takes in a byte array and returns the sha256 digest of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/**
    Runs PBKDF2 with HMAC-SHA512 as the PRF and writes a 64 byte derived key.
*/
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    let mut out = [0u8; 64];
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::encode_02x;

    #[test]
    fn sha256_empty_input() {
        assert_eq!(
            encode_02x(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    /// Single round PBKDF2-HMAC-SHA512 vector
    fn pbkdf2_sha512_single_round() {
        let dk = pbkdf2_hmac_sha512(b"password", b"salt", 1);
        assert_eq!(
            encode_02x(&dk),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }
}
