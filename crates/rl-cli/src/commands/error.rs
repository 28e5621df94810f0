use std::fmt;

use rl_app::ReplaceError;
use serde::Serialize;

use super::submit::SubmitResponse;

/// Category of a failed submission, stable for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    ArticleNotFound,
    TargetImage,
    Persist,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::ArticleNotFound => "article_not_found",
            ErrorKind::TargetImage => "target_image",
            ErrorKind::Persist => "persist",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ReplaceError> for ErrorKind {
    fn from(err: &ReplaceError) -> Self {
        match err {
            ReplaceError::ArticleNotFound { .. } => ErrorKind::ArticleNotFound,
            ReplaceError::TargetImage(_) => ErrorKind::TargetImage,
            ReplaceError::Persist { .. } => ErrorKind::Persist,
        }
    }
}

/// Centralized error mapping for commands.
///
/// Every use-case failure ends up here, so the response shape lives in
/// one place.
pub fn map_err(err: ReplaceError) -> SubmitResponse {
    SubmitResponse::Error {
        kind: ErrorKind::from(&err),
        message: err.to_string(),
    }
}
