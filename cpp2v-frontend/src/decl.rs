//! Declaration model
//!
//! Declarations are owned by the `TranslationUnit`; the rest of the
//! translator only ever borrows them.

use crate::types::{DeclRef, QualType};
use cpp2v_common::{DeclId, SourceLocation, TagKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `static_assert` declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticAssertDecl {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

/// A semantically resolved named declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decl {
    pub id: DeclId,
    pub name: String,
    #[serde(default)]
    pub qualified_name: String,
    #[serde(default)]
    pub mangled: Option<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Specification text attached to the declaration, if any
    #[serde(default)]
    pub annotation: Option<String>,
    pub kind: DeclKind,
}

/// Kinds of declaration the walker distinguishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclKind {
    Namespace {
        #[serde(default)]
        decls: Vec<Decl>,
    },
    /// `extern "C" { ... }`
    LinkageSpec {
        #[serde(default)]
        decls: Vec<Decl>,
    },
    Record {
        tag: TagKind,
        is_definition: bool,
        /// Nested declarations (nested records, methods, static members)
        #[serde(default)]
        members: Vec<Decl>,
    },
    Enum {
        promotion: QualType,
        is_definition: bool,
    },
    /// `typedef` and `using` aliases
    Typedef { underlying: QualType },
    Function { ty: QualType, is_definition: bool },
    Var { ty: QualType, is_definition: bool },
    ClassTemplate {
        pattern: Box<Decl>,
        #[serde(default)]
        specializations: Vec<Decl>,
    },
    FunctionTemplate {
        pattern: Box<Decl>,
        #[serde(default)]
        specializations: Vec<Decl>,
    },
    StaticAssert(StaticAssertDecl),
}

impl Decl {
    pub fn new(id: DeclId, qualified_name: &str, kind: DeclKind) -> Self {
        let name = qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(qualified_name)
            .to_string();
        Self {
            id,
            name,
            qualified_name: qualified_name.to_string(),
            mangled: None,
            location: None,
            annotation: None,
            kind,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotation = Some(annotation.to_string());
        self
    }

    pub fn with_mangled(mut self, mangled: &str) -> Self {
        self.mangled = Some(mangled.to_string());
        self
    }

    /// Reference to this declaration as it appears inside types
    pub fn decl_ref(&self) -> DeclRef {
        DeclRef {
            id: self.id,
            qualified_name: self.qualified_name.clone(),
            mangled: self.mangled.clone(),
        }
    }

    /// Whether this declaration is a definition. Typedefs always are.
    pub fn is_definition(&self) -> bool {
        match &self.kind {
            DeclKind::Record { is_definition, .. }
            | DeclKind::Enum { is_definition, .. }
            | DeclKind::Function { is_definition, .. }
            | DeclKind::Var { is_definition, .. } => *is_definition,
            DeclKind::Typedef { .. } => true,
            DeclKind::Namespace { .. }
            | DeclKind::LinkageSpec { .. }
            | DeclKind::ClassTemplate { .. }
            | DeclKind::FunctionTemplate { .. }
            | DeclKind::StaticAssert(_) => false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DeclKind::Namespace { .. } => "namespace",
            DeclKind::LinkageSpec { .. } => "linkage specification",
            DeclKind::Record { .. } => "record",
            DeclKind::Enum { .. } => "enum",
            DeclKind::Typedef { .. } => "typedef",
            DeclKind::Function { .. } => "function",
            DeclKind::Var { .. } => "variable",
            DeclKind::ClassTemplate { .. } => "class template",
            DeclKind::FunctionTemplate { .. } => "function template",
            DeclKind::StaticAssert(_) => "static assertion",
        }
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind_name(), self.qualified_name)?;
        if let Some(loc) = &self.location {
            write!(f, " at {loc}")?;
        }
        Ok(())
    }
}
