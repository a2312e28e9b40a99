//! Domain errors for the sprint digest.

use std::fmt;

use thiserror::Error;

/// The remote service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Jira,
    Notion,
    Slack,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jira => "Jira",
            Self::Notion => "Notion",
            Self::Slack => "Slack",
        };
        f.write_str(name)
    }
}

/// Errors that abort a sync-and-report run.
///
/// None of these are recovered locally: they propagate to the CLI layer,
/// which logs them and exits non-zero. Records already written stay written.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{service} request failed: {message}")]
    Transport { service: Service, message: String },

    #[error("{service} returned {status}: {body}")]
    Api {
        service: Service,
        status: u16,
        body: String,
    },

    #[error("{service} response could not be decoded: {message}")]
    Decode { service: Service, message: String },
}

impl DomainError {
    /// The HTTP status carried by an [`DomainError::Api`] error, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
