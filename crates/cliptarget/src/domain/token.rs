//! Pre-resolved grammar primitives handed to the resolution pipeline.

use std::fmt;

/// Literal words the target grammar matches on.
pub mod keyword {
    pub const ITEMS: &str = "items";
    pub const REVERSE: &str = "reverse";
    pub const PAST: &str = "past";
    pub const WITH: &str = "with";
    pub const AND: &str = "and";

    /// Every keyword, in grammar order.
    pub const ALL: [&str; 5] = [ITEMS, REVERSE, PAST, WITH, AND];
}

/// One recognized sub-match of an utterance.
///
/// The host vocabulary has already turned audio into these values; the pipeline only decides
/// which grammar rule they satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal grammar word such as `items` or `past`.
    Keyword(String),
    /// A single recognized letter.
    Letter(char),
    /// A small number, used either as a repeat count or as a number-key hint.
    Number(u32),
    /// A number key whose digits must be kept as spoken, such as `007`.
    Key(String),
    /// A spoken position, one-based.
    Ordinal(u32),
    /// A label from the declared search item-type list.
    SearchType(String),
    /// Free-form dictated text.
    Prose(String),
}

impl Token {
    pub fn keyword(word: impl Into<String>) -> Self {
        Token::Keyword(word.into())
    }

    pub fn search_type(label: impl Into<String>) -> Self {
        Token::SearchType(label.into())
    }

    pub fn prose(text: impl Into<String>) -> Self {
        Token::Prose(text.into())
    }

    /// Returns whether this token is the given literal keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Token::Keyword(value) if value == word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(word) => f.write_str(word),
            Token::Letter(letter) => write!(f, "<letter {letter}>"),
            Token::Number(value) => write!(f, "<number {value}>"),
            Token::Key(digits) => write!(f, "<key {digits}>"),
            Token::Ordinal(value) => write!(f, "<ordinal {value}>"),
            Token::SearchType(label) => write!(f, "<type {label}>"),
            Token::Prose(text) => write!(f, "<prose \"{text}\">"),
        }
    }
}

/// Render a phrase for diagnostics.
pub fn describe(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
