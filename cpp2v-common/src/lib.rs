//! cpp2v - Common Types and Utilities
//! 
//! This crate contains the error taxonomy, source locations and small
//! shared definitions used by every stage of the C++ to IR translation.

pub mod error;
pub mod types;
pub mod source_loc;

pub use error::{TranslationError, Result};
pub use types::*;
pub use source_loc::SourceLocation;
