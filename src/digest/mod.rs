//! The grant digest pipeline.
//!
//! This module contains the stages that turn raw registry records into
//! rendered sentences: grant date normalization, name capitalization with
//! acronym exceptions, recency ranking, amount formatting, sentence
//! construction and the pipeline that composes them.

mod amount_format;
mod capitalizer;
mod date_normalizer;
mod pipeline;
mod ranker;
mod sentence_builder;

pub use amount_format::{AmountFormatter, DEFAULT_CURRENCY_WORD, DEFAULT_GROUPING_SEPARATOR};
pub use capitalizer::{Capitalizer, DEFAULT_EXCEPTIONS};
pub use date_normalizer::{normalize_record, parse_grant_date};
pub use pipeline::Pipeline;
pub use ranker::{DEFAULT_DIGEST_LIMIT, rank_by_recency};
pub use sentence_builder::{SentenceBuilder, lowercase_first};
