//! Module emission
//!
//! Prints a populated module as IR text. Each declaration becomes one
//! declaration term whose types come from `TypeLowering`; records are
//! emitted by name only and static assertions by message only.

use crate::module::Module;
use crate::types::TypeLowering;
use cpp2v_common::{Result, TagKind, TranslationError};
use cpp2v_frontend::{Decl, DeclKind, StaticAssertDecl};
use cpp2v_ir::{Term, TermPrinter};

/// Lower one declaration to its declaration term
pub fn decl_term(decl: &Decl, lowering: &TypeLowering<'_>) -> Result<Term> {
    let name = lowering.global_name(&decl.decl_ref())?;
    let term = match &decl.kind {
        DeclKind::Record { tag, .. } => {
            let ctor = match tag {
                TagKind::Struct => "Dstruct",
                TagKind::Class => "Dclass",
                TagKind::Union => "Dunion",
            };
            Term::ctor(ctor, vec![name])
        }
        DeclKind::Enum { promotion, .. } => {
            Term::ctor("Denum", vec![name, lowering.lower_qualified(promotion)?])
        }
        DeclKind::Typedef { underlying } => {
            Term::ctor("Dtypedef", vec![name, lowering.lower_qualified(underlying)?])
        }
        DeclKind::Function { ty, .. } => {
            Term::ctor("Dfunction", vec![name, lowering.lower_qualified(ty)?])
        }
        DeclKind::Var { ty, .. } => {
            Term::ctor("Dvariable", vec![name, lowering.lower_qualified(ty)?])
        }
        DeclKind::Namespace { .. }
        | DeclKind::LinkageSpec { .. }
        | DeclKind::ClassTemplate { .. }
        | DeclKind::FunctionTemplate { .. }
        | DeclKind::StaticAssert(_) => {
            return Err(TranslationError::unsupported(
                "declaration",
                format!("{decl} cannot appear in a module bucket"),
            ));
        }
    };
    Ok(term)
}

pub fn assert_term(assert: &StaticAssertDecl) -> Term {
    Term::ctor(
        "Dstatic_assert",
        vec![Term::string(assert.message.as_deref().unwrap_or(""))],
    )
}

/// Print the whole module. Lowering runs for every entry before any text
/// is produced, so an unsupported type yields no output at all.
pub fn print_module(unit_name: &str, module: &Module<'_>, lowering: &TypeLowering<'_>) -> Result<String> {
    let lower_all = |decls: &[&Decl]| -> Result<Vec<Term>> {
        decls.iter().map(|d| decl_term(d, lowering)).collect()
    };
    let sections = [
        ("declarations", lower_all(module.declarations())?),
        ("definitions", lower_all(module.definitions())?),
        ("template_declarations", lower_all(module.template_declarations())?),
        ("template_definitions", lower_all(module.template_definitions())?),
        ("static_asserts", module.asserts().iter().map(|a| assert_term(a)).collect()),
    ];

    let mut p = TermPrinter::new();
    p.text(&format!("(* cpp2v: {unit_name} *)"));
    p.newline();
    for (section, terms) in &sections {
        p.newline();
        p.text(&format!("Definition {section} : list Decl :="));
        p.newline();
        print_list(&mut p, terms);
        p.text(".");
        p.newline();
    }

    if p.depth() != 0 {
        return Err(TranslationError::InternalError {
            message: format!("unbalanced module output (depth {})", p.depth()),
        });
    }
    Ok(p.finish())
}

fn print_list(p: &mut TermPrinter, terms: &[Term]) {
    p.text("  ");
    p.begin_list();
    for term in terms {
        term.emit(p);
        // one entry per line; `cons` would leave trailing whitespace
        p.text(" ::");
        p.newline();
        p.text("   ");
    }
    p.end_list();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpp2v_common::Signedness;
    use cpp2v_frontend::{BuiltinType, QualType, QualifiedNameResolver, Type};

    #[test]
    fn test_decl_terms() {
        let lowering = TypeLowering::new(&QualifiedNameResolver);
        let int: QualType = Type::Builtin(BuiltinType::int(32, Signedness::Signed)).into();

        let alias = Decl::new(1, "ns::id_t", DeclKind::Typedef { underlying: int.clone() });
        assert_eq!(decl_term(&alias, &lowering).unwrap().to_string(), "Dtypedef \"ns::id_t\" T_int32");

        let u = Decl::new(2, "U", DeclKind::Record { tag: TagKind::Union, is_definition: false, members: vec![] });
        assert_eq!(decl_term(&u, &lowering).unwrap().to_string(), "Dunion \"U\"");

        let g = Decl::new(3, "g", DeclKind::Var { ty: int.with_const(), is_definition: true });
        assert_eq!(decl_term(&g, &lowering).unwrap().to_string(), "Dvariable \"g\" (Qconst T_int32)");
    }

    #[test]
    fn test_namespace_is_not_a_module_entry() {
        let lowering = TypeLowering::new(&QualifiedNameResolver);
        let ns = Decl::new(1, "ns", DeclKind::Namespace { decls: vec![] });
        assert!(decl_term(&ns, &lowering).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_assert_term() {
        let sa = StaticAssertDecl { message: Some("size".into()), location: None };
        assert_eq!(assert_term(&sa).to_string(), "Dstatic_assert \"size\"");
        let bare = StaticAssertDecl { message: None, location: None };
        assert_eq!(assert_term(&bare).to_string(), "Dstatic_assert \"\"");
    }
}
