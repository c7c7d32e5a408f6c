use crate::cli::Args;
use anyhow::{Context, bail};
use clap::Parser;
use futures::StreamExt;
use oxrdfio::{RdfFormat, RdfSerializer};
use quadstream::{ConstructOptions, construct};
use reqwest::Url;
use std::fs;
use std::io::{Read, Write, stdin, stdout};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let endpoint = Url::parse(&args.endpoint)
        .with_context(|| format!("Invalid endpoint URL {}", args.endpoint))?;
    let query = if let Some(query) = args.query {
        query
    } else if let Some(file) = args.query_file {
        fs::read_to_string(&file)
            .with_context(|| format!("Not able to read the query file {}", file.display()))?
    } else {
        let mut query = String::new();
        stdin().lock().read_to_string(&mut query)?;
        query
    };
    let format = if let Some(name) = args.format {
        rdf_format_from_name(&name)?
    } else {
        RdfFormat::NQuads
    };

    let mut options = ConstructOptions::new(endpoint, query).with_operation(args.operation);
    if let (Some(user), Some(password)) = (args.user, args.password) {
        options = options.with_basic_auth(user, password);
    }

    let mut quads = construct(options).await?;
    let mut serializer = RdfSerializer::from_format(format).for_writer(stdout().lock());
    while let Some(quad) = quads.next().await {
        serializer.serialize_quad(&quad?)?;
    }
    serializer.finish()?.flush()?;
    Ok(())
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}
