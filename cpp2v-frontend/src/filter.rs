//! Declaration filters
//!
//! The walker asks a `Filter` about every declaration before handing it to
//! the module builder; rejected declarations are skipped entirely.

use crate::decl::{Decl, DeclKind};

/// Decides whether a declaration is in scope for translation
pub trait Filter {
    fn should_translate(&self, decl: &Decl) -> bool;
}

/// Accepts every declaration
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Filter for AcceptAll {
    fn should_translate(&self, _decl: &Decl) -> bool {
        true
    }
}

/// Keeps declarations located in one of the given files
///
/// Namespaces and linkage specifications are always entered, since their
/// members may come from any file. Declarations without a location are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    files: Vec<String>,
}

impl LocationFilter {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }
}

impl Filter for LocationFilter {
    fn should_translate(&self, decl: &Decl) -> bool {
        if matches!(decl.kind, DeclKind::Namespace { .. } | DeclKind::LinkageSpec { .. }) {
            return true;
        }
        match &decl.location {
            Some(loc) => self.files.iter().any(|f| loc.is_in_file(f)),
            None => false,
        }
    }
}
