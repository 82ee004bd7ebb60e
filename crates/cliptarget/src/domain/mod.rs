//! Target types, grammar tokens and their errors.

pub mod errors;
pub mod model;
pub mod token;
