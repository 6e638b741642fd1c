/*
    Wordlists and the registry that serves them.

    Each supported language has a table of exactly 2048 unique words,
    the index of a word is its position in the table. The registry is
    built once and only read afterwards.
*/

pub mod cs;
pub mod en;
pub mod es;
pub mod fr;
pub mod it;
pub mod ja;
pub mod ko;
pub mod pt;
pub mod zh_hans;
pub mod zh_hant;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{Bip39Error, Result};

pub const WORDLIST_LEN: usize = 2048;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    Italian,
    Japanese,
    Korean,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    Portuguese
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::Portuguese
    ];

    /// The wordlist shipped with the crate for this language.
    pub fn bundled_words(&self) -> &'static [&'static str; WORDLIST_LEN] {
        match self {
            Language::English => &en::WORDS,
            Language::Spanish => &es::WORDS,
            Language::French => &fr::WORDS,
            Language::Italian => &it::WORDS,
            Language::Japanese => &ja::WORDS,
            Language::Korean => &ko::WORDS,
            Language::ChineseSimplified => &zh_hans::WORDS,
            Language::ChineseTraditional => &zh_hant::WORDS,
            Language::Czech => &cs::WORDS,
            Language::Portuguese => &pt::WORDS
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Czech => "czech",
            Language::Portuguese => "portuguese"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/**
    Parses a free-form language tag, either the full name or the
    ISO 639-1 code ("zh-hans" / "zh-hant" for the Chinese lists).
    Anything else is rejected as `UnsupportedLanguage`.
*/
impl FromStr for Language {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase().replace('-', "_");
        let lang = match tag.as_str() {
            "english" | "en" => Language::English,
            "spanish" | "es" => Language::Spanish,
            "french" | "fr" => Language::French,
            "italian" | "it" => Language::Italian,
            "japanese" | "ja" => Language::Japanese,
            "korean" | "ko" => Language::Korean,
            "chinese_simplified" | "chinesesimplified" | "zh_hans" => Language::ChineseSimplified,
            "chinese_traditional" | "chinesetraditional" | "zh_hant" => Language::ChineseTraditional,
            "czech" | "cs" => Language::Czech,
            "portuguese" | "pt" => Language::Portuguese,
            _ => return Err(Bip39Error::UnsupportedLanguage(s.to_string()))
        };
        Ok(lang)
    }
}

struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>
}

/**
    Immutable language -> wordlist table.

    Lookups never mutate so a registry can be shared between
    threads by reference or behind an `Arc` without locking.
*/
pub struct WordlistRegistry {
    lists: HashMap<Language, Wordlist>
}

impl WordlistRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry without any wordlist, every lookup fails.
    pub fn empty() -> Self {
        Self { lists: HashMap::new() }
    }

    /**
        Registry holding every wordlist shipped with the crate.
    */
    pub fn bundled() -> Result<Self> {
        Language::ALL
            .iter()
            .fold(Self::builder(), |b, lang| b.register(*lang, lang.bundled_words().iter().copied()))
            .build()
    }

    pub fn contains(&self, lang: Language) -> bool {
        self.lists.contains_key(&lang)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.lists.keys().copied()
    }

    fn list(&self, lang: Language) -> Result<&Wordlist> {
        self.lists
            .get(&lang)
            .ok_or_else(|| Bip39Error::UnsupportedLanguage(lang.to_string()))
    }

    /// Word at `index` in the language's table.
    pub fn word_at(&self, lang: Language, index: usize) -> Result<&str> {
        let list = self.list(lang)?;
        list.words
            .get(index)
            .map(String::as_str)
            .ok_or(Bip39Error::WordIndexOutOfRange { index })
    }

    /// Position of `word` in the language's table.
    pub fn index_of(&self, lang: Language, word: &str) -> Result<usize> {
        let list = self.list(lang)?;
        list.index
            .get(word)
            .map(|i| *i as usize)
            .ok_or_else(|| Bip39Error::UnknownWord {
                language: lang,
                word: word.to_string()
            })
    }
}

impl fmt::Debug for WordlistRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordlistRegistry")
         .field("languages", &self.lists.keys().collect::<Vec<_>>())
         .finish()
    }
}

/**
    Collects wordlists and validates them into a `WordlistRegistry`.
    Registering a language twice keeps the last list.
*/
#[derive(Default)]
pub struct RegistryBuilder {
    pending: Vec<(Language, Vec<String>)>
}

impl RegistryBuilder {
    pub fn register<I, S>(mut self, lang: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.pending.retain(|(l, _)| *l != lang);
        self.pending.push((lang, words.into_iter().map(Into::into).collect()));
        self
    }

    /**
        Checks every list has exactly 2048 non-empty, unique words
        and builds the registry.
    */
    pub fn build(self) -> Result<WordlistRegistry> {
        let mut lists = HashMap::with_capacity(self.pending.len());

        for (lang, words) in self.pending {
            if words.len() != WORDLIST_LEN {
                return Err(Bip39Error::InvalidWordlist {
                    language: lang,
                    reason: format!("expected {} words, found {}", WORDLIST_LEN, words.len())
                });
            }

            let mut seen: HashSet<&str> = HashSet::with_capacity(WORDLIST_LEN);
            for (i, word) in words.iter().enumerate() {
                if word.is_empty() {
                    return Err(Bip39Error::InvalidWordlist {
                        language: lang,
                        reason: format!("empty word at index {}", i)
                    });
                }
                if !seen.insert(word.as_str()) {
                    return Err(Bip39Error::InvalidWordlist {
                        language: lang,
                        reason: format!("duplicate word '{}' at index {}", word, i)
                    });
                }
            }

            //Indexes fit in 11 bits so u16 is enough
            let index = words
                .iter()
                .enumerate()
                .map(|(i, w)| (w.clone(), i as u16))
                .collect();
            lists.insert(lang, Wordlist { words, index });
        }

        debug!(languages = lists.len(), "built wordlist registry");
        Ok(WordlistRegistry { lists })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WordlistRegistry {
        WordlistRegistry::bundled().unwrap()
    }

    #[test]
    fn get_wrong_index_word() {
        let r = registry();
        assert!(matches!(
            r.word_at(Language::English, 2049),
            Err(Bip39Error::WordIndexOutOfRange { index: 2049 })
        ));
        assert!(matches!(
            r.word_at(Language::English, 2048),
            Err(Bip39Error::WordIndexOutOfRange { index: 2048 })
        ));
        assert_eq!(r.word_at(Language::English, 2047).unwrap(), "zoo");
    }

    #[test]
    fn get_word_in_every_language() {
        let r = registry();
        assert_eq!(r.word_at(Language::English, 1).unwrap(), "ability");
        assert_eq!(r.word_at(Language::Spanish, 2).unwrap(), "abeja");
        assert_eq!(r.word_at(Language::French, 3).unwrap(), "abeille");
        assert_eq!(r.word_at(Language::Italian, 4).unwrap(), "abisso");
        assert_eq!(r.word_at(Language::Japanese, 5).unwrap(), "あきる");
        //Korean list is stored decomposed (jamo)
        assert_eq!(r.word_at(Language::Korean, 6).unwrap(), "\u{1100}\u{1161}\u{1106}\u{116e}\u{11b7}");
        assert_eq!(r.word_at(Language::ChineseSimplified, 7).unwrap(), "和");
        assert_eq!(r.word_at(Language::ChineseTraditional, 8).unwrap(), "人");
        assert_eq!(r.word_at(Language::Czech, 0).unwrap(), "abdikace");
        assert_eq!(r.word_at(Language::Portuguese, 0).unwrap(), "abacate");
    }

    #[test]
    fn index_lookup_is_bidirectional() {
        let r = registry();
        for lang in Language::ALL.iter() {
            for i in [0usize, 1, 1024, 2047].iter() {
                let word = r.word_at(*lang, *i).unwrap();
                assert_eq!(r.index_of(*lang, word).unwrap(), *i);
            }
        }
        assert!(matches!(
            r.index_of(Language::English, "bitcoin"),
            Err(Bip39Error::UnknownWord { language: Language::English, .. })
        ));
    }

    #[test]
    fn missing_language() {
        let r = WordlistRegistry::builder()
            .register(Language::English, en::WORDS.iter().copied())
            .build()
            .unwrap();
        assert!(r.contains(Language::English));
        assert!(!r.contains(Language::Spanish));
        assert!(matches!(
            r.word_at(Language::Spanish, 0),
            Err(Bip39Error::UnsupportedLanguage(_))
        ));
        assert!(matches!(
            WordlistRegistry::empty().index_of(Language::English, "abandon"),
            Err(Bip39Error::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn parse_language_tags() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("zh-hans".parse::<Language>().unwrap(), Language::ChineseSimplified);
        assert_eq!("chinese_traditional".parse::<Language>().unwrap(), Language::ChineseTraditional);
        for lang in Language::ALL.iter() {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), *lang);
        }
        match "german".parse::<Language>() {
            Err(Bip39Error::UnsupportedLanguage(tag)) => assert_eq!(tag, "german"),
            _ => panic!("german should not be accepted")
        }
    }

    #[test]
    fn build_rejects_malformed_lists() {
        let short = WordlistRegistry::builder()
            .register(Language::English, en::WORDS[..2047].iter().copied())
            .build();
        assert!(matches!(short, Err(Bip39Error::InvalidWordlist { language: Language::English, .. })));

        let mut dup: Vec<&str> = en::WORDS.to_vec();
        dup[10] = "abandon";
        let dup = WordlistRegistry::builder().register(Language::English, dup).build();
        assert!(matches!(dup, Err(Bip39Error::InvalidWordlist { .. })));

        let mut empty: Vec<&str> = en::WORDS.to_vec();
        empty[5] = "";
        let empty = WordlistRegistry::builder().register(Language::English, empty).build();
        assert!(matches!(empty, Err(Bip39Error::InvalidWordlist { .. })));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let r = WordlistRegistry::builder()
            .register(Language::English, es::WORDS.iter().copied())
            .register(Language::English, en::WORDS.iter().copied())
            .build()
            .unwrap();
        assert_eq!(r.word_at(Language::English, 0).unwrap(), "abandon");
        assert_eq!(r.languages().count(), 1);
    }
}
