//! Registry search entry points.
//!
//! # Responsibility
//! - Expose substring query APIs over evidence item fields.
//! - Keep search result shaping inside core.

pub mod substring;
