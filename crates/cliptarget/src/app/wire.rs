//! Canonical wire encoding of resolved targets.
//!
//! Every target becomes one JSON object whose first key is `type`, followed only by the fields
//! that were actually spoken. Unset optional fields are left out entirely rather than written as
//! `null`. The resulting list is the argument handed to the remote command.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::model::{Target, TargetKind, TargetList};

/// One encoded target.
pub type WireObject = Map<String, Value>;

/// Failure while encoding or decoding the wire payload.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("failed to encode {kind} target")]
    Encode {
        kind: TargetKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("{kind} target did not encode to an object")]
    NotAnObject { kind: TargetKind },
    #[error("invalid target at position {index}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to render payload")]
    Render(#[source] serde_json::Error),
}

/// How JSON output is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum OutputStyle {
    /// Single line, as sent over the wire.
    #[default]
    Compact,
    /// Indented for reading.
    Pretty,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Compact => "compact",
            OutputStyle::Pretty => "pretty",
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, WireError> {
        match self {
            OutputStyle::Compact => serde_json::to_string(value),
            OutputStyle::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(WireError::Render)
    }
}

impl FromStr for OutputStyle {
    type Err = OutputStyleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(OutputStyle::Compact),
            "pretty" => Ok(OutputStyle::Pretty),
            other => Err(OutputStyleParseError::UnknownStyle(other.to_string())),
        }
    }
}

/// Error returned when parsing an [`OutputStyle`] fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum OutputStyleParseError {
    #[error("unknown output style '{0}'")]
    UnknownStyle(String),
}

/// Encode one target as a wire object.
pub fn encode_target(target: &Target) -> Result<WireObject, WireError> {
    let kind = target.kind();
    match serde_json::to_value(target).map_err(|source| WireError::Encode { kind, source })? {
        Value::Object(object) => Ok(object),
        _ => Err(WireError::NotAnObject { kind }),
    }
}

/// Ordered list of encoded targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WirePayload(Vec<WireObject>);

impl WirePayload {
    /// Encode a target list, one object per target in the same order.
    pub fn encode(targets: &TargetList) -> Result<Self, WireError> {
        targets
            .iter()
            .map(encode_target)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Decode the payload back into targets, as the receiving side would.
    pub fn decode(&self) -> Result<Vec<Target>, WireError> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, object)| {
                serde_json::from_value(Value::Object(object.clone()))
                    .map_err(|source| WireError::Decode { index, source })
            })
            .collect()
    }

    pub fn objects(&self) -> &[WireObject] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self, style: OutputStyle) -> Result<String, WireError> {
        style.render(self)
    }
}

/// A remote command invocation carrying the payload as its single argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcCommand {
    pub command_id: String,
    pub args: Vec<WirePayload>,
}

impl RpcCommand {
    pub fn for_targets(
        command_id: impl Into<String>,
        targets: &TargetList,
    ) -> Result<Self, WireError> {
        Ok(Self {
            command_id: command_id.into(),
            args: vec![WirePayload::encode(targets)?],
        })
    }

    pub fn render(&self, style: OutputStyle) -> Result<String, WireError> {
        style.render(self)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use serde_json::json;

    use super::*;
    use crate::domain::model::{Hint, PrimitiveTarget, RangeTarget, SearchTarget};

    fn letter(value: char) -> Hint {
        Hint::from_letters(&[value]).unwrap()
    }

    fn keys(object: &WireObject) -> Vec<&str> {
        object.keys().map(String::as_str).collect()
    }

    #[test]
    fn bare_primitive_has_only_type_and_hint() {
        let object = encode_target(&PrimitiveTarget::new(letter('a')).into()).unwrap();
        assert_eq!(keys(&object), ["type", "hint"]);
        assert_eq!(Value::Object(object), json!({"type": "primitive", "hint": "a"}));
    }

    #[test]
    fn primitive_with_count_and_reverse() {
        let target = PrimitiveTarget {
            hint: letter('a'),
            count: NonZeroU32::new(3),
            reverse: Some(true),
        };
        let object = encode_target(&target.into()).unwrap();
        assert_eq!(keys(&object), ["type", "hint", "count", "reverse"]);
        assert_eq!(object["count"], json!(3));
        assert_eq!(object["reverse"], json!(true));
    }

    #[test]
    fn explicit_false_is_kept() {
        let target = PrimitiveTarget {
            hint: letter('a'),
            count: None,
            reverse: Some(false),
        };
        let object = encode_target(&target.into()).unwrap();
        assert_eq!(object["reverse"], json!(false));
    }

    #[test]
    fn range_always_has_three_keys() {
        let target = RangeTarget {
            start: letter('a'),
            end: Hint::from_key(12),
        };
        let object = encode_target(&target.into()).unwrap();
        assert_eq!(keys(&object), ["type", "start", "end"]);
        assert_eq!(
            Value::Object(object),
            json!({"type": "range", "start": "a", "end": "12"})
        );
    }

    #[test]
    fn search_uses_camel_case_field_names() {
        let mut by_type = SearchTarget::new(1);
        by_type.item_type = Some("function".into());
        let mut by_text = SearchTarget::new(0);
        by_text.item_text = Some("hello world".into());

        assert_eq!(
            Value::Object(encode_target(&by_type.into()).unwrap()),
            json!({"type": "search", "offset": 1, "itemType": "function"})
        );
        assert_eq!(
            Value::Object(encode_target(&by_text.into()).unwrap()),
            json!({"type": "search", "offset": 0, "itemText": "hello world"})
        );
    }

    #[test]
    fn payload_preserves_order() {
        let list = TargetList::new(vec![
            PrimitiveTarget::new(letter('b')).into(),
            SearchTarget::new(4).into(),
            PrimitiveTarget::new(letter('a')).into(),
        ])
        .unwrap();
        let payload = WirePayload::encode(&list).unwrap();
        assert_eq!(payload.len(), 3);
        let tags: Vec<_> = payload
            .objects()
            .iter()
            .map(|object| object["type"].as_str().unwrap())
            .collect();
        assert_eq!(tags, ["primitive", "search", "primitive"]);
        assert_eq!(payload.decode().unwrap(), list.into_vec());
    }

    #[test]
    fn decode_reports_the_bad_position() {
        let payload: WirePayload = serde_json::from_value(json!([
            {"type": "primitive", "hint": "a"},
            {"type": "unknown"}
        ]))
        .unwrap();
        assert!(matches!(payload.decode(), Err(WireError::Decode { index: 1, .. })));
    }

    #[test]
    fn rpc_command_wraps_payload_as_single_argument() {
        let list = TargetList::new(vec![PrimitiveTarget::new(letter('a')).into()]).unwrap();
        let command = RpcCommand::for_targets("clippy.copyItems", &list).unwrap();
        assert_eq!(
            command.render(OutputStyle::Compact).unwrap(),
            r#"{"commandId":"clippy.copyItems","args":[[{"type":"primitive","hint":"a"}]]}"#
        );
    }

    #[test]
    fn output_style_parses_aliases() {
        assert_eq!("Pretty".parse::<OutputStyle>(), Ok(OutputStyle::Pretty));
        assert_eq!("json".parse::<OutputStyle>(), Ok(OutputStyle::Compact));
        assert!("yaml".parse::<OutputStyle>().is_err());
    }
}
