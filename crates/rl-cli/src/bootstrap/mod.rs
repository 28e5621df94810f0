pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::run;
pub use wiring::{wire_dependencies, WiringError};
