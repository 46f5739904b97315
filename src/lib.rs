//! Feedback intake service: surprise classification, lexicon sentiment
//! scoring and running summaries over append-only in-memory logs.

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod store;
pub mod summary;
pub mod tagger;
