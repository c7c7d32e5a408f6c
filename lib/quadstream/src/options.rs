use crate::request::Operation;
use reqwest::Url;

/// Holds the configuration for a single CONSTRUCT request.
///
/// ```
/// use quadstream::{ConstructOptions, Operation};
/// use reqwest::Url;
///
/// let options = ConstructOptions::new(
///     Url::parse("https://query.example.com/sparql")?,
///     "CONSTRUCT WHERE { ?s ?p ?o }",
/// )
/// .with_operation(Operation::PostDirect)
/// .with_basic_auth("alice", "secret");
/// assert_eq!(options.operation, Operation::PostDirect);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct ConstructOptions {
    /// The URL of the SPARQL query endpoint.
    pub endpoint: Url,
    /// The CONSTRUCT query to execute, as SPARQL text.
    ///
    /// The query is sent verbatim; it is never parsed or validated.
    pub query: String,
    /// How the query is transmitted to the endpoint.
    pub operation: Operation,
    /// The user name for HTTP Basic authentication.
    pub user: Option<String>,
    /// The password for HTTP Basic authentication.
    ///
    /// Credentials are only sent when both [`user`](Self::user) and
    /// [`password`](Self::password) are present.
    pub password: Option<String>,
}

impl ConstructOptions {
    /// Creates options for running `query` against `endpoint` with the
    /// default [`Operation::GetQuery`] and no authentication.
    pub fn new(endpoint: Url, query: impl Into<String>) -> Self {
        Self {
            endpoint,
            query: query.into(),
            operation: Operation::default(),
            user: None,
            password: None,
        }
    }

    /// Selects how the query is transmitted to the endpoint.
    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Authenticates the request with the given user name and password.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }
}
