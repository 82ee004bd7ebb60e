//! Hint resolution from a number key or a short letter sequence.

use crate::domain::errors::GrammarError;
use crate::domain::model::Hint;
use crate::domain::token::Token;

/// Resolve the tokens of a hint sub-match into a [`Hint`].
///
/// A number key wins over letters; letters must number one or two. Anything else is a
/// [`GrammarError::MissingHint`].
pub fn resolve_hint(tokens: &[Token]) -> Result<Hint, GrammarError> {
    match tokens {
        [Token::Number(key)] => Ok(Hint::from_key(*key)),
        [Token::Key(digits)] => Hint::from_digits(digits),
        [Token::Letter(first)] => Hint::from_letters(&[*first]),
        [Token::Letter(first), Token::Letter(second)] => Hint::from_letters(&[*first, *second]),
        _ => Err(GrammarError::MissingHint),
    }
}
