use crate::error::UnsupportedOperationError;
use crate::options::ConstructOptions;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::str::FromStr;

/// The media type of SPARQL queries, used as the body of direct POST requests.
const SPARQL_QUERY_MEDIA_TYPE: &str = "application/sparql-query";
/// The media type the client asks the endpoint to answer with.
const N_QUADS_MEDIA_TYPE: &str = "application/n-quads";

/// How a query is transmitted to the endpoint.
///
/// The [SPARQL protocol](https://www.w3.org/TR/sparql11-protocol/#query-operation)
/// defines three ways of sending a query. Most endpoints support all of them,
/// but GET requests can hit URL length limits for large queries and some
/// endpoints only accept one of the POST encodings.
///
/// ```
/// use quadstream::Operation;
/// use std::str::FromStr;
///
/// assert_eq!(Operation::from_str("postQuery")?, Operation::PostQuery);
/// assert!(Operation::from_str("patchQuery").is_err());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Send a GET request with the query in the `query` URL parameter.
    #[default]
    GetQuery,
    /// Send a POST request with the query in a form-encoded `query` parameter.
    PostQuery,
    /// Send a POST request with the query as the raw request body.
    PostDirect,
}

impl Operation {
    /// The name of the operation on configuration surfaces.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetQuery => "getQuery",
            Self::PostQuery => "postQuery",
            Self::PostDirect => "postDirect",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnsupportedOperationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "getQuery" => Ok(Self::GetQuery),
            "postQuery" => Ok(Self::PostQuery),
            "postDirect" => Ok(Self::PostDirect),
            _ => Err(UnsupportedOperationError::new(name)),
        }
    }
}

/// Builds the HTTP request that transmits the query to the endpoint.
///
/// The returned builder carries the method, URL, headers and body mandated by
/// the selected [`Operation`]. Credentials are applied later, when the
/// request is sent.
pub(crate) fn query_request(client: &Client, options: &ConstructOptions) -> RequestBuilder {
    let request = match options.operation {
        Operation::GetQuery => client
            .get(options.endpoint.clone())
            .query(&[("query", options.query.as_str())]),
        Operation::PostQuery => client
            .post(options.endpoint.clone())
            .form(&[("query", options.query.as_str())]),
        Operation::PostDirect => client
            .post(options.endpoint.clone())
            .header(CONTENT_TYPE, SPARQL_QUERY_MEDIA_TYPE)
            .body(options.query.clone()),
    };
    request.header(ACCEPT, N_QUADS_MEDIA_TYPE)
}
