//! Presentation-facing commands
//! 面向展示层的命令
//!
//! Commands layer (Driving Adapter) → UseCases accessor → Use Case → Ports

pub mod error;
pub mod form;
pub mod submit;

pub use error::{map_err, ErrorKind};
pub use form::{initialize, FormDescription, FormField};
pub use submit::{submit, SubmitRequest, SubmitResponse};
