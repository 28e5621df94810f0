use thiserror::Error;

use crate::{ArticleId, ImageReference};

#[derive(Debug, Error)]
pub enum ContentStoreError {
    #[error("article {0} not found")]
    NotFound(ArticleId),

    #[error("content store rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("content store transport error: {0}")]
    Transport(String),

    #[error("content store response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("image {reference} responded with status {status}")]
    Status {
        reference: ImageReference,
        status: u16,
    },

    #[error("image {reference} could not be retrieved: {message}")]
    Transport {
        reference: ImageReference,
        message: String,
    },
}

impl RetrievalError {
    pub fn reference(&self) -> &ImageReference {
        match self {
            RetrievalError::Status { reference, .. } => reference,
            RetrievalError::Transport { reference, .. } => reference,
        }
    }
}
