//! Resolution pipeline: hints, target builders, alternation, and wire encoding.

pub mod builders;
pub mod hint;
pub mod pipeline;
pub mod resolver;
pub mod wire;
