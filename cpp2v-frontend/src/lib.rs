//! cpp2v - Front-end model
//! 
//! This crate describes what the translator receives from the C++ front end
//! and the collaborators it consults while walking a translation unit:
//! - Types: the closed set of elaborated type nodes
//! - Declarations: named declarations and static assertions
//! - Filter, SpecCollector and NameResolver capability traits
//! - Loading of JSON AST dumps produced by the front end

pub mod types;
pub mod decl;
pub mod translation_unit;
pub mod filter;
pub mod specs;
pub mod names;

pub use types::{Type, QualType, BuiltinType, BuiltinKind, CallingConv, DeclRef};
pub use decl::{Decl, DeclKind, StaticAssertDecl};
pub use translation_unit::TranslationUnit;
pub use filter::{Filter, AcceptAll, LocationFilter};
pub use specs::{SpecCollector, AnnotationCollector, SpecEntry};
pub use names::{NameResolver, QualifiedNameResolver};

use cpp2v_common::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// High-level front-end interface
pub struct Frontend;

impl Frontend {
    /// Load an elaborated translation unit from a JSON AST dump
    pub fn load_str(source: &str) -> Result<TranslationUnit> {
        let tu: TranslationUnit = serde_json::from_str(source)?;
        debug!("Loaded translation unit '{}' with {} declarations", tu.filename, tu.decl_count());
        Ok(tu)
    }

    /// Load an elaborated translation unit from a file
    pub fn load_file(path: &Path) -> Result<TranslationUnit> {
        let source = fs::read_to_string(path)?;
        Self::load_str(&source)
    }

    /// Serialize a translation unit back to JSON
    pub fn to_json(tu: &TranslationUnit) -> Result<String> {
        Ok(serde_json::to_string_pretty(tu)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_load_empty_unit() {
        let tu = Frontend::load_str(r#"{ "filename": "empty.cpp" }"#).unwrap();
        assert_eq!(tu.filename, "empty.cpp");
        assert!(tu.decls.is_empty());
    }

    #[test]
    fn test_frontend_rejects_malformed_input() {
        let err = Frontend::load_str("{ \"decls\": 3 }").unwrap_err();
        assert!(matches!(err, cpp2v_common::TranslationError::InvalidInput { .. }));
    }
}
