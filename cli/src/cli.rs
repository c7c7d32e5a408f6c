use clap::{Parser, ValueHint};
use quadstream::Operation;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "quadstream")]
/// Quadstream command line client for streaming SPARQL CONSTRUCT queries
pub struct Args {
    /// URL of the SPARQL query endpoint
    #[arg(short, long, value_hint = ValueHint::Url)]
    pub endpoint: String,
    /// The CONSTRUCT query to execute
    ///
    /// If neither this nor --query-file is given, the query is read from stdin.
    #[arg(short, long, conflicts_with = "query_file")]
    pub query: Option<String>,
    /// File to read the CONSTRUCT query from
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub query_file: Option<PathBuf>,
    /// How the query is transmitted to the endpoint
    ///
    /// One of "getQuery", "postQuery" or "postDirect".
    #[arg(long, default_value = "getQuery")]
    pub operation: Operation,
    /// User name for HTTP Basic authentication
    #[arg(long)]
    pub user: Option<String>,
    /// Password for HTTP Basic authentication
    ///
    /// Credentials are only sent when --user is also given.
    #[arg(long)]
    pub password: Option<String>,
    /// The format the resulting quads are written in
    ///
    /// It can be an extension like "nq" or a MIME type like "application/n-quads".
    ///
    /// By default N-Quads is used.
    #[arg(long)]
    pub format: Option<String>,
}
