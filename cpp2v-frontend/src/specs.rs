//! Specification collection
//!
//! Specifications are attached to declarations by an external annotation
//! pass. They are recorded alongside the module, keyed by declaration
//! identity, and written to a separate file by the driver.

use crate::decl::Decl;
use cpp2v_common::DeclId;

/// Records `(declaration, specification)` pairs
pub trait SpecCollector {
    fn add_specification(&mut self, decl: &Decl, spec: &str);
}

/// A specification recorded for one declaration
#[derive(Debug, Clone, PartialEq)]
pub struct SpecEntry {
    pub decl: DeclId,
    pub name: String,
    pub spec: String,
}

/// Collects specifications from declaration annotations, in encounter order
#[derive(Debug, Clone, Default)]
pub struct AnnotationCollector {
    entries: Vec<SpecEntry>,
}

impl AnnotationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries as the contents of a spec file
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("(* {} *)\n{}\n\n", entry.name, entry.spec.trim()));
        }
        out
    }
}

impl SpecCollector for AnnotationCollector {
    fn add_specification(&mut self, decl: &Decl, spec: &str) {
        self.entries.push(SpecEntry {
            decl: decl.id,
            name: decl.qualified_name.clone(),
            spec: spec.to_string(),
        });
    }
}
