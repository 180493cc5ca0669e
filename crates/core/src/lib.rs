//! Core catalog, indexing, and search logic for dataset exploration
//!
//! This crate provides the fundamental data structures and algorithms
//! behind the dataset dashboard: a catalog of immutable datasets, a
//! recursive token indexer, fuzzy free-text search, multi-way comparison,
//! and templated insight generation.

pub mod catalog;
pub mod compare;
pub mod dataset;
pub mod error;
pub mod index;
pub mod insights;
pub mod search;
pub mod similarity;

pub use error::{Error, Result};
