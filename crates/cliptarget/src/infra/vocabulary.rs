//! Spoken-word tables standing in for the host's vocabulary captures.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Result, bail};

use crate::domain::token::keyword;
use crate::infra::config::VocabularyConfig;

const PHONETIC_ALPHABET: [(&str, char); 26] = [
    ("air", 'a'),
    ("bat", 'b'),
    ("cap", 'c'),
    ("drum", 'd'),
    ("each", 'e'),
    ("fine", 'f'),
    ("gust", 'g'),
    ("harp", 'h'),
    ("sit", 'i'),
    ("jury", 'j'),
    ("crunch", 'k'),
    ("look", 'l'),
    ("made", 'm'),
    ("near", 'n'),
    ("odd", 'o'),
    ("pit", 'p'),
    ("quench", 'q'),
    ("red", 'r'),
    ("sun", 's'),
    ("trap", 't'),
    ("urge", 'u'),
    ("vest", 'v'),
    ("whale", 'w'),
    ("plex", 'x'),
    ("yank", 'y'),
    ("zip", 'z'),
];

const SMALL_NUMBERS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ORDINALS: [&str; 20] = [
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

/// Read-only word tables built once at startup.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    letters: HashMap<String, char>,
    search_types: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Build the tables from configuration, validating letter overrides.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self> {
        let mut letters: HashMap<String, char> = PHONETIC_ALPHABET
            .iter()
            .map(|(word, letter)| ((*word).to_owned(), *letter))
            .collect();

        for (word, value) in &config.letters {
            let spoken = normalize(word);
            if spoken.is_empty() || spoken.contains(' ') {
                bail!("letter override '{word}' must be a single spoken word");
            }
            if keyword::ALL.contains(&spoken.as_str()) {
                bail!("letter override '{spoken}' collides with a grammar keyword");
            }
            let mut chars = value.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                bail!("letter override '{word}' must map to exactly one character, got '{value}'");
            };
            if !letter.is_alphabetic() {
                bail!("letter override '{word}' maps to non-letter '{letter}'");
            }
            letters.insert(spoken, letter.to_ascii_lowercase());
        }

        let mut vocabulary = Self {
            letters,
            search_types: BTreeMap::new(),
        };
        for (spoken, label) in &config.search_types {
            let spoken = normalize(spoken);
            if spoken.is_empty() || label.trim().is_empty() {
                bail!("search type entries must have a spoken form and a label");
            }
            if let Some(kind) = vocabulary.shadowed_by(&spoken) {
                bail!("search type '{spoken}' collides with a {kind}");
            }
            vocabulary
                .search_types
                .insert(spoken, label.trim().to_owned());
        }

        Ok(vocabulary)
    }

    /// What a search type's spoken form would hide from the lexer, if anything.
    fn shadowed_by(&self, spoken: &str) -> Option<&'static str> {
        let parts: Vec<&str> = spoken.split(' ').collect();
        if parts.iter().any(|part| keyword::ALL.contains(part)) {
            return Some("grammar keyword");
        }
        if let [word] = parts.as_slice() {
            if self.letter(word).is_some() {
                return Some("letter word");
            }
            if self.ordinal(word).is_some() {
                return Some("ordinal word");
            }
            if self.digit_key(word).is_some() {
                return Some("number key");
            }
        }
        match self.number(&parts) {
            Some((_, used)) if used == parts.len() => Some("number word"),
            _ => None,
        }
    }

    /// Letter for a spoken word: phonetic alphabet entries or a bare letter.
    pub fn letter(&self, word: &str) -> Option<char> {
        if let Some(letter) = self.letters.get(word) {
            return Some(*letter);
        }
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => {
                Some(letter.to_ascii_lowercase())
            }
            _ => None,
        }
    }

    /// Small number at the start of `words`, with the number of words it used.
    pub fn number(&self, words: &[&str]) -> Option<(u32, usize)> {
        let first = *words.first()?;
        if is_digits(first) {
            if first.len() > 1 && first.starts_with('0') {
                return None;
            }
            return first.parse().ok().map(|value| (value, 1));
        }
        if let Some(value) = SMALL_NUMBERS.iter().position(|word| *word == first) {
            return Some((value as u32, 1));
        }

        let tens = TENS.iter().position(|word| *word == first)? as u32 * 10 + 20;
        match words.get(1).and_then(|next| unit_value(next)) {
            Some(unit) => Some((tens + unit, 2)),
            None => Some((tens, 1)),
        }
    }

    /// Digit string that must keep its exact spelling, such as `007`.
    ///
    /// Plain numbers go through [`Vocabulary::number`]; this only accepts what that would lose.
    pub fn digit_key(&self, word: &str) -> Option<String> {
        if !is_digits(word) || self.number(&[word]).is_some() {
            return None;
        }
        Some(word.to_owned())
    }

    /// One-based position for a spoken ordinal.
    pub fn ordinal(&self, word: &str) -> Option<u32> {
        ORDINALS
            .iter()
            .position(|candidate| *candidate == word)
            .map(|index| index as u32 + 1)
    }

    /// Longest configured search type starting at `words`, with the number of words it used.
    pub fn search_type(&self, words: &[&str]) -> Option<(&str, usize)> {
        self.search_types
            .iter()
            .filter_map(|(spoken, label)| {
                let parts: Vec<&str> = spoken.split(' ').collect();
                let matched = parts.len() <= words.len()
                    && parts.iter().zip(words).all(|(part, word)| part == word);
                matched.then_some((label.as_str(), parts.len()))
            })
            .max_by_key(|(_, used)| *used)
    }

    /// Configured search types as `(spoken, label)` pairs.
    pub fn search_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.search_types
            .iter()
            .map(|(spoken, label)| (spoken.as_str(), label.as_str()))
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        keyword::ALL.contains(&word)
    }
}

fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|byte| byte.is_ascii_digit())
}

fn unit_value(word: &str) -> Option<u32> {
    SMALL_NUMBERS[1..10]
        .iter()
        .position(|candidate| *candidate == word)
        .map(|index| index as u32 + 1)
}

fn normalize(word: &str) -> String {
    word.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
