//! Utterance text to payload, end to end.

use anyhow::{Context, Result};

use crate::app::resolver::resolve_targets;
use crate::app::wire::{RpcCommand, WirePayload};
use crate::domain::model::TargetList;
use crate::infra::config::Config;
use crate::infra::lexer::Lexer;
use crate::infra::vocabulary::Vocabulary;

/// Resolves utterances with a vocabulary fixed at construction.
#[derive(Debug, Clone)]
pub struct Pipeline {
    vocabulary: Vocabulary,
    command_id: String,
}

impl Pipeline {
    pub fn new(vocabulary: Vocabulary, command_id: impl Into<String>) -> Self {
        Self {
            vocabulary,
            command_id: command_id.into(),
        }
    }

    /// Build the vocabulary and default command from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary =
            Vocabulary::from_config(&config.vocabulary).context("invalid vocabulary config")?;
        Ok(Self::new(vocabulary, config.rpc.command().to_owned()))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn command_id(&self) -> &str {
        &self.command_id
    }

    /// Tokenize and resolve one utterance.
    pub fn resolve(&self, utterance: &str) -> Result<TargetList> {
        let tokens = Lexer::new(&self.vocabulary)
            .tokenize(utterance)
            .with_context(|| format!("failed to read utterance '{utterance}'"))?;
        resolve_targets(&tokens).with_context(|| format!("failed to resolve '{utterance}'"))
    }

    /// Resolve and encode one utterance.
    pub fn payload(&self, utterance: &str) -> Result<WirePayload> {
        let targets = self.resolve(utterance)?;
        WirePayload::encode(&targets).context("failed to encode targets")
    }

    /// Resolve one utterance into a remote command, using `command_id` when given.
    pub fn rpc_command(&self, utterance: &str, command_id: Option<&str>) -> Result<RpcCommand> {
        let targets = self.resolve(utterance)?;
        let command_id = command_id.unwrap_or(self.command_id.as_str());
        RpcCommand::for_targets(command_id, &targets).context("failed to encode targets")
    }
}
