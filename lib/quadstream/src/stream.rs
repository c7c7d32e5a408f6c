use crate::error::ConstructError;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt, ready};
use oxrdf::Quad;
use oxttl::nquads::{LowLevelNQuadsParser, NQuadsParser};
use reqwest::Response;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream of the quads produced by a CONSTRUCT query.
///
/// Quads are parsed incrementally from the response body: the connection is
/// only read from when the caller asks for the next quad, so backpressure
/// propagates to the endpoint. Dropping the stream aborts the underlying
/// HTTP exchange.
///
/// After the first error item nothing further is emitted. Quads yielded
/// before the error remain valid.
pub struct QuadStream {
    body: Option<BoxStream<'static, reqwest::Result<Bytes>>>,
    parser: LowLevelNQuadsParser,
    done: bool,
}

impl QuadStream {
    pub(crate) fn new(response: Response) -> Self {
        Self::from_body(response.bytes_stream().boxed())
    }

    pub(crate) fn from_body(body: BoxStream<'static, reqwest::Result<Bytes>>) -> Self {
        Self {
            body: Some(body),
            parser: NQuadsParser::new().low_level(),
            done: false,
        }
    }

    /// Collects all remaining quads into a vector.
    pub async fn try_collect_to_vec(mut self) -> Result<Vec<Quad>, ConstructError> {
        let mut result = Vec::new();
        while let Some(element) = self.next().await {
            result.push(element?);
        }
        Ok(result)
    }

    fn terminate(&mut self) {
        self.done = true;
        self.body = None;
    }
}

impl fmt::Debug for QuadStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadStream")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl Stream for QuadStream {
    type Item = Result<Quad, ConstructError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if self.done {
                return Poll::Ready(None);
            }

            // Quads already buffered inside the parser
            if let Some(result) = self.parser.parse_next() {
                return Poll::Ready(Some(match result {
                    Ok(quad) => Ok(quad),
                    Err(error) => {
                        self.terminate();
                        Err(error.into())
                    }
                }));
            }

            // Feed the parser from the response body
            let Some(body) = self.body.as_mut() else {
                self.done = true;
                return Poll::Ready(None);
            };
            match ready!(body.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => self.parser.extend_from_slice(&chunk),
                Some(Err(error)) => {
                    self.terminate();
                    return Poll::Ready(Some(Err(error.into())));
                }
                None => {
                    self.parser.end();
                    self.body = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use oxrdf::vocab::xsd;
    use oxrdf::{BlankNode, GraphName, Literal, NamedNode};
    use std::error::Error;

    fn parsed(chunks: Vec<&'static [u8]>) -> QuadStream {
        QuadStream::from_body(
            stream::iter(
                chunks
                    .into_iter()
                    .map(|chunk| Ok::<_, reqwest::Error>(Bytes::from_static(chunk))),
            )
            .boxed(),
        )
    }

    #[test]
    #[allow(clippy::use_debug, reason = "the Debug output is what is tested")]
    fn test_debug_omits_the_parser_internals() {
        // unwrap/unwrap_err on construct's result needs this impl
        assert_eq!(
            format!("{:?}", parsed(vec![])),
            "QuadStream { done: false, .. }"
        );
    }

    #[tokio::test]
    async fn test_parses_quads_split_across_chunks() -> Result<(), Box<dyn Error>> {
        let quads = parsed(vec![
            b"<http://example.com/s> <http://exam",
            b"ple.com/p> \"obj",
            b"ect\" <http://example.com/g> .\n",
        ])
        .try_collect_to_vec()
        .await?;
        assert_eq!(
            quads,
            vec![Quad::new(
                NamedNode::new_unchecked("http://example.com/s"),
                NamedNode::new_unchecked("http://example.com/p"),
                Literal::new_simple_literal("object"),
                NamedNode::new_unchecked("http://example.com/g"),
            )]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_body_is_an_empty_stream() -> Result<(), Box<dyn Error>> {
        assert!(parsed(vec![]).try_collect_to_vec().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_quads_arrive_in_response_order() -> Result<(), Box<dyn Error>> {
        let quads = parsed(vec![
            b"<http://example.com/s2> <http://example.com/p> <http://example.com/o> .\n\
              <http://example.com/s1> <http://example.com/p> <http://example.com/o> .\n\
              <http://example.com/s3> <http://example.com/p> <http://example.com/o> .\n",
        ])
        .try_collect_to_vec()
        .await?;
        let subjects = quads
            .iter()
            .map(|quad| quad.subject.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            subjects,
            [
                "<http://example.com/s2>",
                "<http://example.com/s1>",
                "<http://example.com/s3>"
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_triples_land_in_the_default_graph() -> Result<(), Box<dyn Error>> {
        let quads = parsed(vec![
            b"<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n",
        ])
        .try_collect_to_vec()
        .await?;
        assert_eq!(quads[0].graph_name, GraphName::DefaultGraph);
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_nodes_and_literals_survive_parsing() -> Result<(), Box<dyn Error>> {
        let quads = parsed(vec![
            b"_:b0 <http://example.com/p> \"chat\"@fr .\n\
              <http://example.com/s> <http://example.com/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
        ])
        .try_collect_to_vec()
        .await?;
        assert_eq!(
            quads,
            vec![
                Quad::new(
                    BlankNode::new_unchecked("b0"),
                    NamedNode::new_unchecked("http://example.com/p"),
                    Literal::new_language_tagged_literal_unchecked("chat", "fr"),
                    GraphName::DefaultGraph,
                ),
                Quad::new(
                    NamedNode::new_unchecked("http://example.com/s"),
                    NamedNode::new_unchecked("http://example.com/p"),
                    Literal::new_typed_literal("1", xsd::INTEGER),
                    GraphName::DefaultGraph,
                ),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_keeps_quads_emitted_before_an_error() {
        let mut stream = parsed(vec![
            b"<http://example.com/s1> <http://example.com/p> <http://example.com/o> .\n",
            b"this is not n-quads\n",
            b"<http://example.com/s2> <http://example.com/p> <http://example.com/o> .\n",
        ]);
        assert!(stream.next().await.unwrap().is_ok());
        assert!(matches!(
            stream.next().await.unwrap(),
            Err(ConstructError::Parsing(_))
        ));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_truncated_input_raises_an_error() {
        let mut stream = parsed(vec![b"<http://example.com/s> <http://example.com/p> "]);
        assert!(matches!(
            stream.next().await.unwrap(),
            Err(ConstructError::Parsing(_))
        ));
        assert!(stream.next().await.is_none());
    }
}
