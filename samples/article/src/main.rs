//! article-snippets
//!
//! Runs the article's list snippets.
//!
//! # Usage
//!
//! ```bash
//! # every encoding, default workload
//! cargo run -p article-snippets
//!
//! # one encoding, verbose
//! RUST_LOG=article_snippets=trace cargo run -p article-snippets -- --encoding scott --length 1000
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_snippets::config::Config;
use article_snippets::error::SnippetError;
use article_snippets::snippets;

fn main() -> Result<(), SnippetError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "article_snippets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    tracing::info!(
        encoding = %config.encoding,
        length = config.length,
        map_layers = config.map_layers,
        "running snippets"
    );

    for outcome in snippets::run(&config)? {
        tracing::info!(
            encoding = %outcome.encoding,
            squares = ?outcome.squares,
            workload_length = outcome.workload.len(),
            "encoding agrees"
        );
        println!("{}: {:?}", outcome.encoding, outcome.squares);
    }
    Ok(())
}
