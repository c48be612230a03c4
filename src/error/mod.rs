//! Error module orchestrator.
//!
//! Every fallible operation in the crate reports through [`TexError`].

mod types;

pub use types::{Result, TexError};
