//! Domain models for hints and the targets built from them.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::domain::errors::GrammarError;

/// Canonical identifier of one hinted on-screen item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hint(String);

impl Hint {
    /// Hint spoken as a number key; its decimal string form.
    pub fn from_key(key: u32) -> Self {
        Self(key.to_string())
    }

    /// Hint spoken as a digit string, kept exactly as spelled.
    pub fn from_digits(digits: &str) -> Result<Self, GrammarError> {
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(GrammarError::MissingHint);
        }
        Ok(Self(digits.to_owned()))
    }

    /// Hint spoken as one or two letters, lower-cased and concatenated.
    pub fn from_letters(letters: &[char]) -> Result<Self, GrammarError> {
        if letters.is_empty() || letters.len() > 2 {
            return Err(GrammarError::MissingHint);
        }
        Ok(Self(letters.iter().flat_map(|c| c.to_lowercase()).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// "Operate on the item at `hint`", optionally repeated and reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveTarget {
    pub hint: Hint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<NonZeroU32>,
    /// Only ever `Some(true)` when built from speech; absent means unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

impl PrimitiveTarget {
    pub fn new(hint: Hint) -> Self {
        Self {
            hint,
            count: None,
            reverse: None,
        }
    }
}

/// Inclusive span between two hinted items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTarget {
    pub start: Hint,
    pub end: Hint,
}

/// The `offset`-th (zero-based) matching item from the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTarget {
    pub offset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_text: Option<String>,
}

impl SearchTarget {
    pub fn new(offset: u32) -> Self {
        Self {
            offset,
            item_type: None,
            item_text: None,
        }
    }
}

/// Discriminator carried as the `type` key on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Primitive,
    Range,
    Search,
}

impl TargetKind {
    /// Stable tag string used in the wire payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Primitive => "primitive",
            TargetKind::Range => "range",
            TargetKind::Search => "search",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    Primitive(PrimitiveTarget),
    Range(RangeTarget),
    Search(SearchTarget),
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Primitive(_) => TargetKind::Primitive,
            Target::Range(_) => TargetKind::Range,
            Target::Search(_) => TargetKind::Search,
        }
    }
}

impl From<PrimitiveTarget> for Target {
    fn from(value: PrimitiveTarget) -> Self {
        Target::Primitive(value)
    }
}

impl From<RangeTarget> for Target {
    fn from(value: RangeTarget) -> Self {
        Target::Range(value)
    }
}

impl From<SearchTarget> for Target {
    fn from(value: SearchTarget) -> Self {
        Target::Search(value)
    }
}

/// Non-empty targets in utterance order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetList(Vec<Target>);

impl TargetList {
    pub fn new(targets: Vec<Target>) -> Result<Self, GrammarError> {
        if targets.is_empty() {
            return Err(GrammarError::EmptyUtterance);
        }
        Ok(Self(targets))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Target] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Target> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_hints_are_lowercased() {
        let hint = Hint::from_letters(&['A', 'b']).unwrap();
        assert_eq!(hint.as_str(), "ab");
    }

    #[test]
    fn letter_hints_reject_empty_and_long_sequences() {
        assert_eq!(Hint::from_letters(&[]), Err(GrammarError::MissingHint));
        assert_eq!(
            Hint::from_letters(&['a', 'b', 'c']),
            Err(GrammarError::MissingHint)
        );
    }

    #[test]
    fn digit_hints_keep_their_spelling() {
        assert_eq!(Hint::from_digits("007").unwrap().as_str(), "007");
        assert_eq!(Hint::from_digits(""), Err(GrammarError::MissingHint));
        assert_eq!(Hint::from_digits("7a"), Err(GrammarError::MissingHint));
    }

    #[test]
    fn target_list_must_not_be_empty() {
        assert_eq!(TargetList::new(Vec::new()), Err(GrammarError::EmptyUtterance));
    }

    #[test]
    fn kind_tags_match_wire_names() {
        let range = Target::from(RangeTarget {
            start: Hint::from_key(1),
            end: Hint::from_key(4),
        });
        assert_eq!(range.kind().as_str(), "range");
        assert_eq!(TargetKind::Primitive.to_string(), "primitive");
        assert_eq!(TargetKind::Search.as_str(), "search");
    }
}
