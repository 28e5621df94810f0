//! Vision-model equivalence oracle.

mod openai_vision;
mod wire;

pub use openai_vision::{OpenAiVisionOracle, OracleError};
