//! article-snippets
//!
//! The runnable half of the sumlist article. Each encoding builds
//! `cons(3, cons(2, empty()))`, maps it with `n => n * n`, and materializes
//! `[9, 4]`; a configurable workload then checks that all encodings agree on
//! longer lists and chained maps.

pub mod config;
pub mod error;
pub mod snippets;
