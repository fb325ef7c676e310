//! Global names and calling conventions
//!
//! The name resolver turns declaration identities into the stable global
//! identifiers used to cross-reference declarations in the IR.

use crate::types::{CallingConv, DeclRef};
use cpp2v_common::{Result, TranslationError};

/// Produces canonical global identifiers and calling-convention tokens
pub trait NameResolver {
    fn global_name(&self, decl: &DeclRef) -> Result<String>;
    fn calling_conv(&self, cc: CallingConv) -> Result<&'static str>;
}

/// Uses the front end's mangled name when present, else the qualified name
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedNameResolver;

impl NameResolver for QualifiedNameResolver {
    fn global_name(&self, decl: &DeclRef) -> Result<String> {
        if let Some(mangled) = &decl.mangled {
            return Ok(mangled.clone());
        }
        if decl.qualified_name.is_empty() {
            return Err(TranslationError::unsupported(
                "declaration",
                format!("declaration #{} has no name", decl.id),
            ));
        }
        Ok(decl.qualified_name.clone())
    }

    fn calling_conv(&self, cc: CallingConv) -> Result<&'static str> {
        match cc {
            CallingConv::C => Ok("CC_C"),
            CallingConv::Win64 => Ok("CC_MsAbi"),
            CallingConv::X86RegCall => Ok("CC_RegCall"),
            other => Err(TranslationError::unsupported(
                "calling convention",
                format!("{other:?}"),
            )),
        }
    }
}
