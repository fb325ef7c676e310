//! Type model for elaborated C++
//!
//! This module defines the type nodes handed over by the front end after
//! semantic analysis and template instantiation. The set of kinds is
//! closed: anything the front end reports that is not modelled here
//! arrives as `Type::Unsupported` and is rejected by the lowering.

use cpp2v_common::{DeclId, Signedness};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a named declaration from inside a type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclRef {
    pub id: DeclId,
    pub qualified_name: String,
    #[serde(default)]
    pub mangled: Option<String>,
}

impl DeclRef {
    pub fn new(id: DeclId, qualified_name: &str) -> Self {
        Self {
            id,
            qualified_name: qualified_name.to_string(),
            mangled: None,
        }
    }

    pub fn with_mangled(mut self, mangled: &str) -> Self {
        self.mangled = Some(mangled.to_string());
        self
    }
}

/// Calling conventions the front end can attach to a function type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CallingConv {
    #[default]
    C,
    X86StdCall,
    X86FastCall,
    X86ThisCall,
    X86VectorCall,
    X86Pascal,
    X86RegCall,
    Win64,
    X86_64SysV,
    Aapcs,
    AapcsVfp,
    AArch64VectorCall,
    Swift,
    PreserveMost,
    PreserveAll,
}

/// Classification of a builtin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinKind {
    Void,
    Bool,
    NullPtr,
    /// Standard and extended integer types (`int`, `unsigned long`, `__int128`, ...)
    Integer(Signedness),
    /// `char`, `wchar_t`, `char8_t`, `char16_t`, `char32_t` and signed/unsigned variants
    Character(Signedness),
    Floating,
    /// Target-specific sizeless types (SVE vectors, RVV types, ...)
    Sizeless,

    // Placeholder kinds that must never survive elaboration
    Dependent,
    Overload,
    BoundMember,
    PseudoObject,
    UnknownAny,
    BuiltinFn,
}

/// A builtin type together with its target size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuiltinType {
    pub kind: BuiltinKind,
    /// Size in bits as computed for the target
    #[serde(default)]
    pub bits: u32,
    /// Front-end spelling, e.g. `unsigned long`
    pub spelling: String,
}

impl BuiltinType {
    pub fn new(kind: BuiltinKind, bits: u32, spelling: &str) -> Self {
        Self {
            kind,
            bits,
            spelling: spelling.to_string(),
        }
    }

    pub fn void() -> Self {
        Self::new(BuiltinKind::Void, 0, "void")
    }

    pub fn bool() -> Self {
        Self::new(BuiltinKind::Bool, 8, "bool")
    }

    pub fn nullptr() -> Self {
        Self::new(BuiltinKind::NullPtr, 64, "std::nullptr_t")
    }

    pub fn int(bits: u32, signedness: Signedness) -> Self {
        let spelling = match (bits, signedness) {
            (8, Signedness::Signed) => "signed char",
            (8, Signedness::Unsigned) => "unsigned char",
            (16, Signedness::Signed) => "short",
            (16, Signedness::Unsigned) => "unsigned short",
            (32, Signedness::Signed) => "int",
            (32, Signedness::Unsigned) => "unsigned int",
            (64, Signedness::Signed) => "long",
            (64, Signedness::Unsigned) => "unsigned long",
            (128, Signedness::Signed) => "__int128",
            (128, Signedness::Unsigned) => "unsigned __int128",
            (_, Signedness::Signed) => "_BitInt",
            (_, Signedness::Unsigned) => "unsigned _BitInt",
        };
        Self::new(BuiltinKind::Integer(signedness), bits, spelling)
    }

    pub fn char(bits: u32, signedness: Signedness) -> Self {
        let spelling = match bits {
            8 => "char",
            16 => "char16_t",
            _ => "char32_t",
        };
        Self::new(BuiltinKind::Character(signedness), bits, spelling)
    }

    pub fn float(bits: u32) -> Self {
        let spelling = match bits {
            32 => "float",
            64 => "double",
            _ => "long double",
        };
        Self::new(BuiltinKind::Floating, bits, spelling)
    }
}

/// A type reference with its top-level qualifiers
///
/// `ty == None` is a null type reference. Qualifiers belong to this
/// reference site only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualType {
    #[serde(default)]
    pub ty: Option<Box<Type>>,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_volatile: bool,
}

impl QualType {
    pub fn new(ty: Type) -> Self {
        Self {
            ty: Some(Box::new(ty)),
            is_const: false,
            is_volatile: false,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    pub fn type_ptr(&self) -> Option<&Type> {
        self.ty.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.ty.is_none()
    }

    pub fn is_unqualified(&self) -> bool {
        !self.is_const && !self.is_volatile
    }
}

impl From<Type> for QualType {
    fn from(ty: Type) -> Self {
        QualType::new(ty)
    }
}

/// Fully elaborated C++ type node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Builtin(BuiltinType),

    Pointer { pointee: QualType },
    LValueReference { pointee: QualType },
    RValueReference { pointee: QualType },
    MemberPointer { class: DeclRef, pointee: QualType },

    /// Struct, class or union; members live on the declaration only
    Record { decl: DeclRef },
    /// `promotion` is the integer promotion type of the canonical declaration
    Enum { decl: DeclRef, promotion: QualType },
    /// `underlying` is the underlying type of the canonical declaration
    Typedef { decl: DeclRef, underlying: QualType },
    InjectedClassName {
        #[serde(default)]
        decl: Option<DeclRef>,
        specialization: QualType,
    },

    // Sugar
    Paren { inner: QualType },
    Elaborated { named: QualType },
    SubstTemplateTypeParm { replacement: QualType },
    Decltype { underlying: QualType },
    TypeOfExpr { underlying: QualType },
    Attributed { modified: QualType },
    /// `auto` / `decltype(auto)`; a null `deduced` means not yet deduced
    Deduced {
        #[serde(default)]
        deduced: QualType,
    },

    ConstantArray { element: QualType, size: u128 },
    IncompleteArray { element: QualType },
    Decayed { original: QualType, pointee: QualType },

    FunctionProto {
        #[serde(default)]
        calling_conv: CallingConv,
        ret: QualType,
        #[serde(default)]
        params: Vec<QualType>,
    },

    TemplateTypeParm { name: String },
    /// `aliased` is present when the specialization is sugar for a concrete type
    TemplateSpecialization {
        template_name: String,
        #[serde(default)]
        aliased: Option<QualType>,
    },

    /// Any kind the front end reports that has no representation here
    Unsupported { class_name: String },
}

impl Type {
    pub fn pointer(pointee: impl Into<QualType>) -> Self {
        Type::Pointer { pointee: pointee.into() }
    }

    pub fn record(decl: DeclRef) -> Self {
        Type::Record { decl }
    }

    /// Name of the front-end type class, used in diagnostics
    pub fn class_name(&self) -> &str {
        match self {
            Type::Builtin(_) => "Builtin",
            Type::Pointer { .. } => "Pointer",
            Type::LValueReference { .. } => "LValueReference",
            Type::RValueReference { .. } => "RValueReference",
            Type::MemberPointer { .. } => "MemberPointer",
            Type::Record { .. } => "Record",
            Type::Enum { .. } => "Enum",
            Type::Typedef { .. } => "Typedef",
            Type::InjectedClassName { .. } => "InjectedClassName",
            Type::Paren { .. } => "Paren",
            Type::Elaborated { .. } => "Elaborated",
            Type::SubstTemplateTypeParm { .. } => "SubstTemplateTypeParm",
            Type::Decltype { .. } => "Decltype",
            Type::TypeOfExpr { .. } => "TypeOfExpr",
            Type::Attributed { .. } => "Attributed",
            Type::Deduced { .. } => "Deduced",
            Type::ConstantArray { .. } => "ConstantArray",
            Type::IncompleteArray { .. } => "IncompleteArray",
            Type::Decayed { .. } => "Decayed",
            Type::FunctionProto { .. } => "FunctionProto",
            Type::TemplateTypeParm { .. } => "TemplateTypeParm",
            Type::TemplateSpecialization { .. } => "TemplateSpecialization",
            Type::Unsupported { class_name } => class_name,
        }
    }
}

impl fmt::Display for QualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            write!(f, "const ")?;
        }
        if self.is_volatile {
            write!(f, "volatile ")?;
        }
        match self.type_ptr() {
            Some(ty) => write!(f, "{ty}"),
            None => write!(f, "<null>"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Builtin(b) => write!(f, "{}", b.spelling),
            Type::Pointer { pointee } => write!(f, "{pointee}*"),
            Type::LValueReference { pointee } => write!(f, "{pointee}&"),
            Type::RValueReference { pointee } => write!(f, "{pointee}&&"),
            Type::MemberPointer { class, pointee } => {
                write!(f, "{pointee} {}::*", class.qualified_name)
            }
            Type::Record { decl } => write!(f, "{}", decl.qualified_name),
            Type::Enum { decl, .. } => write!(f, "enum {}", decl.qualified_name),
            Type::Typedef { decl, .. } => write!(f, "{}", decl.qualified_name),
            Type::InjectedClassName { decl: Some(decl), .. } => write!(f, "{}", decl.qualified_name),
            Type::InjectedClassName { decl: None, specialization } => write!(f, "{specialization}"),
            Type::Paren { inner } => write!(f, "({inner})"),
            Type::Elaborated { named } => write!(f, "{named}"),
            Type::SubstTemplateTypeParm { replacement } => write!(f, "{replacement}"),
            Type::Decltype { underlying } => write!(f, "decltype({underlying})"),
            Type::TypeOfExpr { underlying } => write!(f, "typeof({underlying})"),
            Type::Attributed { modified } => write!(f, "{modified} [[attr]]"),
            Type::Deduced { deduced } if deduced.is_null() => write!(f, "auto"),
            Type::Deduced { deduced } => write!(f, "{deduced}"),
            Type::ConstantArray { element, size } => write!(f, "{element}[{size}]"),
            Type::IncompleteArray { element } => write!(f, "{element}[]"),
            Type::Decayed { original, .. } => write!(f, "{original} (decayed)"),
            Type::FunctionProto { ret, params, .. } => {
                write!(f, "{ret} (")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
            Type::TemplateTypeParm { name } => write!(f, "{name}"),
            Type::TemplateSpecialization { template_name, .. } => write!(f, "{template_name}<...>"),
            Type::Unsupported { class_name } => write!(f, "<{class_name}>"),
        }
    }
}
