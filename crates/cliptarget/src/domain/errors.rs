//! Domain-specific errors.

use thiserror::Error;

/// A phrase did not satisfy the target grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("expected a number key or one or two letters for a hint")]
    MissingHint,
    #[error("no target rule matches phrase: {phrase}")]
    NoMatchingRule { phrase: String },
    #[error("utterance contains no targets")]
    EmptyUtterance,
    #[error("target {index} of the utterance is empty")]
    EmptyPhrase { index: usize },
}

/// A spoken word could not be mapped onto the vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unknown word '{word}' at position {position}")]
    UnknownWord { word: String, position: usize },
}
