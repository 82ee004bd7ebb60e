//! Target alternation and conjunction handling.

use crate::app::builders::{build_primitive, build_range, build_search};
use crate::domain::errors::GrammarError;
use crate::domain::model::{Target, TargetKind, TargetList};
use crate::domain::token::{Token, describe, keyword};

type TargetRule = fn(&[Token]) -> Option<Target>;

/// Rules in priority order. The first rule that accepts a phrase wins.
const TARGET_RULES: [(TargetKind, TargetRule); 3] = [
    (TargetKind::Primitive, primitive_rule),
    (TargetKind::Range, range_rule),
    (TargetKind::Search, search_rule),
];

fn primitive_rule(phrase: &[Token]) -> Option<Target> {
    build_primitive(phrase).map(Target::from)
}

fn range_rule(phrase: &[Token]) -> Option<Target> {
    build_range(phrase).map(Target::from)
}

fn search_rule(phrase: &[Token]) -> Option<Target> {
    build_search(phrase).map(Target::from)
}

/// Resolve one target phrase, trying primitive, range and search in that order.
pub fn resolve_target(phrase: &[Token]) -> Result<Target, GrammarError> {
    for (kind, rule) in TARGET_RULES {
        if let Some(target) = rule(phrase) {
            tracing::debug!(kind = %kind, phrase = %describe(phrase), "resolved target");
            return Ok(target);
        }
    }

    let phrase = describe(phrase);
    tracing::debug!(phrase = %phrase, "no target rule matched");
    Err(GrammarError::NoMatchingRule { phrase })
}

/// Split an utterance on the `and` conjunction.
///
/// Prose is already a single token, so an `and` spoken inside dictated text never splits.
pub fn split_phrases(tokens: &[Token]) -> Vec<&[Token]> {
    tokens
        .split(|token| token.is_keyword(keyword::AND))
        .collect()
}

/// Resolve already-split phrases into a [`TargetList`], preserving their order.
pub fn resolve_phrases<'a, I>(phrases: I) -> Result<TargetList, GrammarError>
where
    I: IntoIterator<Item = &'a [Token]>,
{
    let mut targets = Vec::new();
    for (index, phrase) in phrases.into_iter().enumerate() {
        if phrase.is_empty() {
            return Err(GrammarError::EmptyPhrase { index });
        }
        targets.push(resolve_target(phrase)?);
    }
    TargetList::new(targets)
}

/// Resolve a whole utterance of the form `<target> [and <target>]*`.
pub fn resolve_targets(tokens: &[Token]) -> Result<TargetList, GrammarError> {
    if tokens.is_empty() {
        return Err(GrammarError::EmptyUtterance);
    }
    resolve_phrases(split_phrases(tokens))
}
