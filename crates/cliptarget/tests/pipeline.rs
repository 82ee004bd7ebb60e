use serde_json::{Value, json};

use cliptarget::app::pipeline::Pipeline;
use cliptarget::app::resolver::{resolve_phrases, resolve_targets, split_phrases};
use cliptarget::app::wire::WirePayload;
use cliptarget::domain::errors::GrammarError;
use cliptarget::domain::token::Token;
use cliptarget::infra::config::{Config, VocabularyConfig};
use cliptarget::infra::vocabulary::Vocabulary;

fn kw(word: &str) -> Token {
    Token::keyword(word)
}

fn encode(tokens: &[Token]) -> Value {
    let targets = resolve_targets(tokens).expect("utterance resolves");
    serde_json::to_value(WirePayload::encode(&targets).expect("targets encode")).unwrap()
}

#[test]
fn counted_reverse_primitive() {
    let tokens = [Token::Number(3), kw("items"), kw("reverse"), Token::Letter('a')];
    assert_eq!(
        encode(&tokens),
        json!([{"type": "primitive", "hint": "a", "count": 3, "reverse": true}])
    );
}

#[test]
fn range_between_two_hints() {
    let tokens = [Token::Letter('a'), kw("past"), Token::Letter('b')];
    assert_eq!(
        encode(&tokens),
        json!([{"type": "range", "start": "a", "end": "b"}])
    );
}

#[test]
fn search_by_item_type() {
    let tokens = [Token::Ordinal(2), Token::search_type("function")];
    assert_eq!(
        encode(&tokens),
        json!([{"type": "search", "offset": 1, "itemType": "function"}])
    );
}

#[test]
fn search_by_text_without_ordinal() {
    let tokens = [kw("with"), Token::prose("hello world")];
    assert_eq!(
        encode(&tokens),
        json!([{"type": "search", "offset": 0, "itemText": "hello world"}])
    );
}

#[test]
fn conjunction_of_primitives() {
    let tokens = [Token::Letter('a'), kw("and"), Token::Letter('b')];
    assert_eq!(
        encode(&tokens),
        json!([
            {"type": "primitive", "hint": "a"},
            {"type": "primitive", "hint": "b"}
        ])
    );
}

#[test]
fn n_phrases_give_n_objects() {
    for count in 1..=6u32 {
        let mut tokens = Vec::new();
        for key in 0..count {
            if key > 0 {
                tokens.push(kw("and"));
            }
            tokens.push(Token::Number(key));
        }
        let payload = WirePayload::encode(&resolve_targets(&tokens).unwrap()).unwrap();
        assert_eq!(payload.len(), count as usize);
        let hints: Vec<_> = payload
            .objects()
            .iter()
            .map(|object| object["hint"].as_str().unwrap().to_owned())
            .collect();
        let expected: Vec<_> = (0..count).map(|key| key.to_string()).collect();
        assert_eq!(hints, expected);
    }
}

#[test]
fn pre_split_phrases_resolve_in_order() {
    let first = [Token::Number(4), kw("past"), Token::Number(9)];
    let second = [kw("with"), Token::prose("todo")];
    let list = resolve_phrases([&first[..], &second[..]]).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(
        split_phrases(&[Token::Letter('a'), kw("and"), Token::Letter('b')]).len(),
        2
    );
}

#[test]
fn failures_propagate_instead_of_defaulting() {
    let err = resolve_targets(&[Token::Ordinal(3)]).unwrap_err();
    assert!(matches!(err, GrammarError::NoMatchingRule { .. }));
    assert!(err.to_string().contains("<ordinal 3>"));
}

#[test]
fn spoken_text_with_custom_vocabulary() {
    let mut config = Config::default();
    config
        .vocabulary
        .search_types
        .insert("funk".into(), "function".into());
    let pipeline = Pipeline::from_config(&config).unwrap();

    let payload = pipeline.payload("third funk and two items sun trap").unwrap();
    assert_eq!(
        serde_json::to_value(payload).unwrap(),
        json!([
            {"type": "search", "offset": 2, "itemType": "function"},
            {"type": "primitive", "hint": "st", "count": 2}
        ])
    );
}

#[test]
fn spelled_number_keys_keep_their_digits() {
    let pipeline = Pipeline::from_config(&Config::default()).unwrap();
    let payload = pipeline.payload("007 past 12 and two items 05").unwrap();
    assert_eq!(
        serde_json::to_value(payload).unwrap(),
        json!([
            {"type": "range", "start": "007", "end": "12"},
            {"type": "primitive", "hint": "05", "count": 2}
        ])
    );
}

#[test]
fn vocabulary_is_shared_read_only() {
    let vocabulary = Vocabulary::from_config(&VocabularyConfig::default()).unwrap();
    let pipeline = Pipeline::new(vocabulary, "clippy.copyItems");
    let first = pipeline.resolve("air").unwrap();
    let second = pipeline.resolve("air").unwrap();
    assert_eq!(first, second);
}
