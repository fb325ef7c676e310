//! Common types used throughout the translator
//! 
//! Small identifiers and enums that both the front-end model and the
//! lowering stages need to agree on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration identifier assigned by the front end
pub type DeclId = u32;

/// Signedness of an integral or character type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Signed => write!(f, "Signed"),
            Signedness::Unsigned => write!(f, "Unsigned"),
        }
    }
}

/// Record tag keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    Struct,
    Class,
    Union,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Struct => write!(f, "struct"),
            TagKind::Class => write!(f, "class"),
            TagKind::Union => write!(f, "union"),
        }
    }
}
