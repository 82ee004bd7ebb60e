//! Turns utterance text into grammar tokens using a [`Vocabulary`].

use crate::domain::errors::LexError;
use crate::domain::token::{Token, keyword};
use crate::infra::vocabulary::Vocabulary;

/// Word-level tokenizer over a fixed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Lexer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Tokenize an utterance.
    ///
    /// Words after `with` up to the next `and` become a single prose token and keep their
    /// original casing. Everything else is matched case-insensitively in this order: keywords,
    /// search types, letters, numbers, spelled number keys, ordinals.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, LexError> {
        let spoken: Vec<&str> = text.split_whitespace().collect();
        let lowered: Vec<String> = spoken.iter().map(|word| word.to_lowercase()).collect();
        let words: Vec<&str> = lowered.iter().map(String::as_str).collect();

        let mut tokens = Vec::with_capacity(words.len());
        let mut index = 0;
        while index < words.len() {
            let word = words[index];

            if word == keyword::WITH {
                tokens.push(Token::keyword(keyword::WITH));
                let end = words[index + 1..]
                    .iter()
                    .position(|next| *next == keyword::AND)
                    .map_or(words.len(), |offset| index + 1 + offset);
                if end > index + 1 {
                    tokens.push(Token::prose(spoken[index + 1..end].join(" ")));
                }
                index = end;
                continue;
            }

            let (token, used) = self.classify(&words[index..]).ok_or_else(|| {
                LexError::UnknownWord {
                    word: spoken[index].to_owned(),
                    position: index,
                }
            })?;
            tokens.push(token);
            index += used;
        }
        Ok(tokens)
    }

    fn classify(&self, words: &[&str]) -> Option<(Token, usize)> {
        let word = *words.first()?;
        let vocab = self.vocabulary;

        if vocab.is_keyword(word) {
            return Some((Token::keyword(word), 1));
        }
        if let Some((label, used)) = vocab.search_type(words) {
            return Some((Token::search_type(label), used));
        }
        if let Some(letter) = vocab.letter(word) {
            return Some((Token::Letter(letter), 1));
        }
        if let Some((value, used)) = vocab.number(words) {
            return Some((Token::Number(value), used));
        }
        if let Some(digits) = vocab.digit_key(word) {
            return Some((Token::Key(digits), 1));
        }
        vocab.ordinal(word).map(|value| (Token::Ordinal(value), 1))
    }
}
