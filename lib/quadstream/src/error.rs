use oxttl::TurtleSyntaxError;
use reqwest::StatusCode;

/// An error raised while executing a CONSTRUCT query against an endpoint.
///
/// Errors raised before the response status has been validated are returned
/// from [`construct`](crate::construct) directly; everything that happens
/// later is delivered through the [`QuadStream`](crate::QuadStream).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConstructError {
    /// An error raised while exchanging data with the endpoint.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("SPARQL endpoint returned status {status}: {message}")]
    UnexpectedStatus {
        /// The status code of the response.
        status: StatusCode,
        /// The beginning of the response body.
        message: String,
    },
    /// An error raised while parsing the response body.
    #[error(transparent)]
    Parsing(#[from] TurtleSyntaxError),
}

/// An error raised when an unknown operation name is requested.
#[derive(Debug, Clone, thiserror::Error)]
#[error("'{name}' is not a supported query operation, expected 'getQuery', 'postQuery' or 'postDirect'")]
pub struct UnsupportedOperationError {
    name: String,
}

impl UnsupportedOperationError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The operation name that was rejected.
    pub fn name(&self) -> &str {
        &self.name
    }
}
