//! Core data models for the grant digest.
//!
//! This module contains the record shapes that flow through the pipeline:
//! raw registry records, date-normalized records and the rendered entries
//! handed to the presentation layer.

mod grant_record;
mod rendered_entry;

pub use grant_record::{NormalizedRecord, RawRecord, RecordField};
pub use rendered_entry::RenderedEntry;
