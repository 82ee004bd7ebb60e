//! Builders for each target variant.
//!
//! Every builder matches a whole phrase and returns `None` when the phrase does not have the
//! shape of its rule. Optional fields stay unset unless their words were spoken.

use std::num::NonZeroU32;

use crate::app::hint::resolve_hint;
use crate::domain::model::{PrimitiveTarget, RangeTarget, SearchTarget};
use crate::domain::token::{Token, keyword};

/// `[<number> items [reverse]] <hint>`
pub fn build_primitive(phrase: &[Token]) -> Option<PrimitiveTarget> {
    let (count, reverse, rest) = match phrase {
        [Token::Number(count), items, marker, rest @ ..]
            if items.is_keyword(keyword::ITEMS) && marker.is_keyword(keyword::REVERSE) =>
        {
            (Some(*count), true, rest)
        }
        [Token::Number(count), items, rest @ ..] if items.is_keyword(keyword::ITEMS) => {
            (Some(*count), false, rest)
        }
        rest => (None, false, rest),
    };

    let mut target = PrimitiveTarget::new(resolve_hint(rest).ok()?);
    if let Some(count) = count {
        target.count = Some(NonZeroU32::new(count)?);
    }
    if reverse {
        target.reverse = Some(true);
    }
    Some(target)
}

/// `<hint> past <hint>`
pub fn build_range(phrase: &[Token]) -> Option<RangeTarget> {
    let split = phrase
        .iter()
        .position(|token| token.is_keyword(keyword::PAST))?;
    let (start, end) = (&phrase[..split], &phrase[split + 1..]);
    Some(RangeTarget {
        start: resolve_hint(start).ok()?,
        end: resolve_hint(end).ok()?,
    })
}

/// `[<ordinal>] (<search type> | with <prose>)`
pub fn build_search(phrase: &[Token]) -> Option<SearchTarget> {
    let (offset, rest) = match phrase {
        [Token::Ordinal(ordinal), rest @ ..] => (ordinal.checked_sub(1)?, rest),
        rest => (0, rest),
    };

    let mut target = SearchTarget::new(offset);
    match rest {
        [Token::SearchType(label)] => target.item_type = Some(label.clone()),
        [with, Token::Prose(text)] if with.is_keyword(keyword::WITH) => {
            target.item_text = Some(text.clone())
        }
        _ => return None,
    }
    Some(target)
}
