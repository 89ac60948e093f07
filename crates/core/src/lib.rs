//! `saberwing-core`: shared domain vocabulary.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns)
//! used by the catalogs and by the procurement estimator.

pub mod criticality;
pub mod error;

pub use criticality::Criticality;
pub use error::{DomainError, DomainResult};
