//! Quote and keyword candidate extraction
//!
//! Both extractors are pure functions over strings and produce zero-count
//! entity records; counting happens in [`crate::xref`].

pub mod keywords;
pub mod quotes;
