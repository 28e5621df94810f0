//! # rl-cli
//!
//! Command-line adapter layer for relink.
//!
//! - `bootstrap`: configuration loading, tracing, dependency wiring
//! - `commands`: `initialize` / `submit`, the presentation-facing entry points

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use bootstrap::run;
