use crate::error::ConstructError;
use reqwest::{RequestBuilder, Response};

/// Maximum number of response body bytes carried by a status error.
const ERROR_BODY_LIMIT: usize = 512;

/// Sends the request and validates the response status.
///
/// The returned response has its headers received while the body is still
/// arriving. A non-success status is turned into
/// [`ConstructError::UnexpectedStatus`] together with the beginning of the
/// response body, which endpoints commonly use for a human-readable
/// explanation.
pub(crate) async fn execute(
    request: RequestBuilder,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<Response, ConstructError> {
    let response = with_credentials(request, user, password).send().await?;
    let status = response.status();
    tracing::debug!("SPARQL endpoint answered with {status}");
    if !status.is_success() {
        let message = truncate_message(response.text().await.unwrap_or_default());
        return Err(ConstructError::UnexpectedStatus { status, message });
    }
    Ok(response)
}

/// Applies HTTP Basic authentication when both credentials are present.
///
/// A lone user name or a lone password sends no `Authorization` header.
fn with_credentials(
    request: RequestBuilder,
    user: Option<&str>,
    password: Option<&str>,
) -> RequestBuilder {
    if let (Some(user), Some(password)) = (user, password) {
        request.basic_auth(user, Some(password))
    } else {
        request
    }
}

fn truncate_message(mut message: String) -> String {
    if message.len() > ERROR_BODY_LIMIT {
        let mut boundary = ERROR_BODY_LIMIT;
        while !message.is_char_boundary(boundary) {
            boundary -= 1;
        }
        message.truncate(boundary);
    }
    message
}
