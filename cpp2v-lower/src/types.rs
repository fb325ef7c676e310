//! Type lowering
//!
//! Maps elaborated C++ types onto IR terms. Lowering is total over the
//! modelled kinds except for a single fatal outcome,
//! `TranslationError::UnsupportedConstruct`, which aborts the translation
//! unit. Records are referenced by name only, so self-referential and
//! mutually recursive aggregates never cause unbounded descent.

use cpp2v_common::{Result, Signedness, TranslationError};
use cpp2v_frontend::{BuiltinKind, BuiltinType, DeclRef, NameResolver, QualType, Type};
use cpp2v_ir::{Term, TermPrinter};
use log::warn;

/// Width token for a bit size; sizes without a token map to `unknown_bit_size`
pub fn bitsize(bits: u32) -> &'static str {
    match bits {
        8 => "W8",
        16 => "W16",
        32 => "W32",
        64 => "W64",
        128 => "W128",
        _ => "unknown_bit_size",
    }
}

/// Integer types: dedicated tokens for the common widths, `Tint` otherwise
fn integer_type(bits: u32, signedness: Signedness) -> Term {
    let fast = match (signedness, bits) {
        (Signedness::Signed, 8) => Some("T_int8"),
        (Signedness::Signed, 16) => Some("T_int16"),
        (Signedness::Signed, 32) => Some("T_int32"),
        (Signedness::Signed, 64) => Some("T_int64"),
        (Signedness::Signed, 128) => Some("T_int128"),
        (Signedness::Unsigned, 8) => Some("T_uint8"),
        (Signedness::Unsigned, 16) => Some("T_uint16"),
        (Signedness::Unsigned, 32) => Some("T_uint32"),
        (Signedness::Unsigned, 64) => Some("T_uint64"),
        (Signedness::Unsigned, 128) => Some("T_uint128"),
        _ => None,
    };
    match fast {
        Some(token) => Term::token(token),
        None => Term::ctor(
            "Tint",
            vec![Term::token(bitsize(bits)), Term::token(&signedness.to_string())],
        ),
    }
}

/// Lowers types for one translation unit
pub struct TypeLowering<'a> {
    names: &'a dyn NameResolver,
}

impl<'a> TypeLowering<'a> {
    pub fn new(names: &'a dyn NameResolver) -> Self {
        Self { names }
    }

    /// Canonical global identifier of a declaration, as a string literal
    pub fn global_name(&self, decl: &DeclRef) -> Result<Term> {
        Ok(Term::Str(self.names.global_name(decl)?))
    }

    /// Lower a type reference, wrapping it according to its top-level
    /// qualifiers
    pub fn lower_qualified(&self, qt: &QualType) -> Result<Term> {
        let Some(ty) = qt.type_ptr() else {
            return Err(TranslationError::unsupported(
                "type",
                "unexpected null type reference",
            ));
        };
        let inner = self.lower(ty)?;
        Ok(match (qt.is_const, qt.is_volatile) {
            (false, false) => inner,
            (true, false) => Term::ctor("Qconst", vec![inner]),
            (true, true) => Term::ctor("Qconst_volatile", vec![inner]),
            (false, true) => Term::ctor("Qmut_volatile", vec![inner]),
        })
    }

    /// Lower an unqualified type node
    pub fn lower(&self, ty: &Type) -> Result<Term> {
        match ty {
            Type::Builtin(builtin) => self.lower_builtin(builtin),

            Type::Pointer { pointee } => self.wrap("Tptr", pointee),
            Type::LValueReference { pointee } => self.wrap("Tref", pointee),
            Type::RValueReference { pointee } => self.wrap("Trv_ref", pointee),
            Type::MemberPointer { class, pointee } => Ok(Term::ctor(
                "Tmember_pointer",
                vec![self.global_name(class)?, self.lower_qualified(pointee)?],
            )),

            Type::Record { decl } => Ok(Term::ctor("Tnamed", vec![self.global_name(decl)?])),
            Type::Enum { decl, promotion } => self.alias(decl, promotion),
            Type::Typedef { decl, underlying } => self.alias(decl, underlying),
            Type::InjectedClassName { decl: Some(decl), .. } => {
                Ok(Term::ctor("Tnamed", vec![self.global_name(decl)?]))
            }
            Type::InjectedClassName { decl: None, specialization } => {
                warn!("no underlying declaration for injected class name {specialization}");
                self.lower_qualified(specialization)
            }

            Type::Paren { inner } => self.lower_qualified(inner),
            Type::Elaborated { named } => self.lower_qualified(named),
            Type::SubstTemplateTypeParm { replacement } => self.lower_qualified(replacement),
            Type::Decltype { underlying } | Type::TypeOfExpr { underlying } => {
                self.lower_qualified(underlying)
            }
            Type::Attributed { modified } => self.lower_qualified(modified),
            Type::Deduced { deduced } => {
                if deduced.is_null() {
                    return Err(TranslationError::unsupported("type", "undeduced placeholder type"));
                }
                self.lower_qualified(deduced)
            }

            Type::ConstantArray { element, size } => {
                // IR integer literals are 64-bit; larger counts clamp
                let count = u64::try_from(*size).unwrap_or(u64::MAX);
                Ok(Term::ctor("Tarray", vec![self.lower_qualified(element)?, Term::Int(count)]))
            }
            Type::IncompleteArray { element } => self.const_pointer(element),
            Type::Decayed { pointee, .. } => self.const_pointer(pointee),

            Type::FunctionProto { calling_conv, ret, params } => {
                let cc = self.names.calling_conv(*calling_conv)?;
                let params = params
                    .iter()
                    .map(|p| self.lower_qualified(p))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Term::ctor(
                    "@Tfunction",
                    vec![Term::token(cc), self.lower_qualified(ret)?, Term::List(params)],
                ))
            }

            Type::TemplateTypeParm { name } => Ok(Term::ctor("Ttemplate", vec![Term::string(name)])),
            Type::TemplateSpecialization { aliased: Some(aliased), .. } => self.lower_qualified(aliased),
            Type::TemplateSpecialization { aliased: None, .. } | Type::Unsupported { .. } => {
                Err(TranslationError::unsupported(
                    "type",
                    format!("({}): {}", ty.class_name(), ty),
                ))
            }
        }
    }

    /// Lower a type reference and write it into `p` in argument position
    pub fn print_qualified(&self, qt: &QualType, p: &mut TermPrinter) -> Result<()> {
        let depth = p.depth();
        self.lower_qualified(qt)?.emit_arg(p);
        debug_assert_eq!(depth, p.depth());
        Ok(())
    }

    /// Lower a type node and write it into `p` in argument position
    pub fn print_type(&self, ty: &Type, p: &mut TermPrinter) -> Result<()> {
        let depth = p.depth();
        self.lower(ty)?.emit_arg(p);
        debug_assert_eq!(depth, p.depth());
        Ok(())
    }

    fn lower_builtin(&self, builtin: &BuiltinType) -> Result<Term> {
        match builtin.kind {
            BuiltinKind::Bool => Ok(Term::token("Tbool")),
            BuiltinKind::Void => Ok(Term::token("Tvoid")),
            BuiltinKind::NullPtr => Ok(Term::token("Tnullptr")),
            BuiltinKind::Integer(signedness) => Ok(integer_type(builtin.bits, signedness)),
            BuiltinKind::Character(signedness) => Ok(Term::ctor(
                "Tchar",
                vec![Term::token(bitsize(builtin.bits)), Term::token(&signedness.to_string())],
            )),
            BuiltinKind::Floating => Ok(Term::ctor("Tfloat", vec![Term::token(bitsize(builtin.bits))])),
            // No structured encoding exists; keep the spelling
            BuiltinKind::Sizeless => Ok(Term::ctor(
                "Tarch",
                vec![Term::token("None"), Term::string(&builtin.spelling)],
            )),
            BuiltinKind::Dependent
            | BuiltinKind::Overload
            | BuiltinKind::BoundMember
            | BuiltinKind::PseudoObject
            | BuiltinKind::UnknownAny
            | BuiltinKind::BuiltinFn => Err(TranslationError::unsupported(
                "builtin type",
                format!("({:?}): \"{}\"", builtin.kind, builtin.spelling),
            )),
        }
    }

    fn wrap(&self, ctor: &str, pointee: &QualType) -> Result<Term> {
        Ok(Term::ctor(ctor, vec![self.lower_qualified(pointee)?]))
    }

    fn alias(&self, decl: &DeclRef, underlying: &QualType) -> Result<Term> {
        Ok(Term::ctor(
            "@Talias",
            vec![self.global_name(decl)?, self.lower_qualified(underlying)?],
        ))
    }

    /// Arrays without a bound and decayed arrays both become `const` pointers
    fn const_pointer(&self, element: &QualType) -> Result<Term> {
        Ok(Term::ctor("Qconst", vec![self.wrap("Tptr", element)?]))
    }
}
