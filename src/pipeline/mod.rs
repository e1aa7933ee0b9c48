//! Analysis pipeline
//!
//! Stage seams, the JSON analysis spec with its validation engine, stage
//! observers, and the runner that wires everything together.

pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
