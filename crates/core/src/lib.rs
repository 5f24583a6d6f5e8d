//! linkfeed_core - shared contracts for the linkfeed client cache.
//!
//! This crate provides:
//! - The [`cache::GraphCache`] trait implemented by the normalized
//!   cache and by the pinned-query overlay that wraps it
//! - Request, snapshot, and diff types shared across implementations
//! - Pure helpers for the extracted-state wire shape
//! - Operation-name extraction from parsed GraphQL documents

pub mod cache;
pub mod query;
