//! Infrastructure adapters for config, logging, and the spoken vocabulary.

pub mod config;
pub mod lexer;
pub mod logging;
pub mod vocabulary;
