//! Natural Language Processing components
//!
//! This module provides sentence segmentation and stopword filtering.

pub mod sentences;
pub mod stopwords;
