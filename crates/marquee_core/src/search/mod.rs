//! Full-text search entry points.
//!
//! # Responsibility
//! - Expose the document search backing the admin search fields
//!   (`title`, `details`).
//! - Keep search result shaping inside core.

pub mod fts;
