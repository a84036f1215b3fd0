//! Command-line configuration.

use std::fmt;

use clap::{Parser, ValueEnum};

/// Runs the article's list snippets under one or all encodings.
#[derive(Debug, Clone, Parser)]
#[command(name = "article-snippets", version, about)]
pub struct Config {
    /// Which encoding to run.
    #[arg(long, value_enum, default_value_t = Encoding::All)]
    pub encoding: Encoding,

    /// Number of elements in the workload list.
    #[arg(long, default_value_t = 100)]
    pub length: usize,

    /// How many times `map` is applied to the workload list.
    #[arg(long, default_value_t = 3)]
    pub map_layers: usize,

    /// Largest accepted `--length`. Mapping a tagged list and folding a
    /// Scott list recurse once per element.
    #[arg(long, default_value_t = 10_000)]
    pub max_length: usize,
}

/// A list encoding selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Discriminated union inspected with `match`.
    Tagged,
    /// Closure that dispatches to one handler per case.
    Scott,
    /// Fold driven by an interpreter.
    Algebra,
    /// Every encoding, checked against each other.
    All,
}

impl Encoding {
    /// The concrete encodings this selection stands for.
    pub const fn expand(self) -> &'static [Self] {
        match self {
            Self::Tagged => &[Self::Tagged],
            Self::Scott => &[Self::Scott],
            Self::Algebra => &[Self::Algebra],
            Self::All => &[Self::Tagged, Self::Scott, Self::Algebra],
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tagged => "tagged",
            Self::Scott => "scott",
            Self::Algebra => "algebra",
            Self::All => "all",
        };
        formatter.write_str(name)
    }
}
