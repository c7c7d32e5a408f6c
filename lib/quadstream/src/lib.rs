#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod options;
mod request;
mod stream;
mod transport;

pub mod error;

pub mod model {
    //! The RDF data model quads are expressed in.
    //!
    //! Re-exports the [`oxrdf`] crate.
    pub use oxrdf::*;
}

pub use crate::options::ConstructOptions;
pub use crate::request::Operation;
pub use crate::stream::QuadStream;

use crate::error::ConstructError;
use reqwest::Client;

/// Executes a SPARQL CONSTRUCT query and streams back the resulting quads.
///
/// Sends exactly one HTTP request, built according to
/// [`options.operation`](ConstructOptions::operation). The future resolves
/// once the response status has been validated; the body is consumed lazily
/// through the returned [`QuadStream`]. A non-success status or a
/// connection-level failure rejects the future and no stream is created.
///
/// ```no_run
/// use futures::StreamExt;
/// use quadstream::{ConstructOptions, construct};
/// use reqwest::Url;
///
/// # tokio_test::block_on(async {
/// let options = ConstructOptions::new(
///     Url::parse("https://query.example.com/sparql")?,
///     "CONSTRUCT WHERE { ?s ?p ?o }",
/// );
/// let mut quads = construct(options).await?;
/// while let Some(quad) = quads.next().await {
///     println!("{}", quad?);
/// }
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// # }).unwrap();
/// ```
pub async fn construct(options: ConstructOptions) -> Result<QuadStream, ConstructError> {
    tracing::debug!(
        "Executing CONSTRUCT query against {} via {}",
        options.endpoint,
        options.operation
    );

    let client = Client::new();
    let request = request::query_request(&client, &options);
    let ConstructOptions { user, password, .. } = options;
    let response = transport::execute(request, user.as_deref(), password.as_deref()).await?;
    Ok(QuadStream::new(response))
}
