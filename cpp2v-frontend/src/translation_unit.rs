//! Translation unit container
//!
//! The root of an elaborated AST dump: the main file name and the
//! top-level declarations in source order.

use crate::decl::{Decl, DeclKind};
use serde::{Deserialize, Serialize};

/// One semantically resolved source file plus its includes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub filename: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl TranslationUnit {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            decls: Vec::new(),
        }
    }

    pub fn add_decl(&mut self, decl: Decl) {
        self.decls.push(decl);
    }

    /// Count every declaration in the unit, including nested ones
    pub fn decl_count(&self) -> usize {
        fn count(decls: &[Decl]) -> usize {
            decls.iter().map(|d| 1 + count_children(d)).sum()
        }
        fn count_children(decl: &Decl) -> usize {
            match &decl.kind {
                DeclKind::Namespace { decls } | DeclKind::LinkageSpec { decls } => count(decls),
                DeclKind::Record { members, .. } => count(members),
                DeclKind::ClassTemplate { pattern, specializations }
                | DeclKind::FunctionTemplate { pattern, specializations } => {
                    1 + count_children(pattern) + count(specializations)
                }
                _ => 0,
            }
        }
        count(&self.decls)
    }
}
