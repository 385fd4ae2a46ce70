use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while talking to the order actor.
///
/// Refused lifecycle operations are not errors; they arrive as
/// [`Outcome::Rejected`](crate::domain::Outcome::Rejected).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid order id: {0}")]
    InvalidId(String),
    #[error("Order operation rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::AlreadyExists(id) => OrderError::AlreadyExists(id),
            FrameworkError::Invalid(reason) => OrderError::InvalidId(reason),
            FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
