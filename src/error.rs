use crate::bip39::Language;

/// Errors produced while generating entropy, encoding mnemonics or decoding hex.
///
/// Every variant is a deterministic rejection of its input, apart from
/// `SecureRandomUnavailable` which reports a failure of the environment.
#[derive(Debug, thiserror::Error)]
pub enum Bip39Error {
    /// Entropy bit length outside [128, 256] or not a multiple of 32.
    #[error("invalid entropy length: {bits} bits (expected 128 <= bits <= 256, divisible by 32)")]
    InvalidEntropyLength { bits: usize },

    /// No wordlist is registered for the requested language tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Word index outside [0, 2047].
    #[error("word index {index} out of range (0 <= index < 2048)")]
    WordIndexOutOfRange { index: usize },

    /// The word does not appear in the language's wordlist.
    #[error("word '{word}' is not in the {language} wordlist")]
    UnknownWord { language: Language, word: String },

    /// Odd length or non-hex character in a hex string.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),

    /// The operating system's secure random source failed.
    #[error("secure random source unavailable: {0}")]
    SecureRandomUnavailable(#[from] rand::Error),

    /// A wordlist handed to the registry is not 2048 unique words.
    #[error("invalid {language} wordlist: {reason}")]
    InvalidWordlist { language: Language, reason: String },
}

pub type Result<T> = std::result::Result<T, Bip39Error>;
