//! Translation-unit walker
//!
//! Visits the declarations of a translation unit in source order, consults
//! the filter, reports annotations to the spec collector, and classifies
//! everything else into the module.

use crate::module::{Flags, Module};
use crate::options::TranslationOptions;
use cpp2v_frontend::{Decl, DeclKind, Filter, SpecCollector, TranslationUnit};
use log::debug;

/// Populate `module` from the declarations of `tu`
pub fn build_module<'tu>(
    tu: &'tu TranslationUnit,
    module: &mut Module<'tu>,
    filter: &dyn Filter,
    specs: &mut dyn SpecCollector,
    options: &TranslationOptions,
) {
    let mut builder = BuildModule { module, filter, specs, options };
    for decl in &tu.decls {
        builder.visit(decl, Flags::new());
    }
    debug!("Built module for '{}' with {} entries", tu.filename, builder.module.len());
}

struct BuildModule<'a, 'tu> {
    module: &'a mut Module<'tu>,
    filter: &'a dyn Filter,
    specs: &'a mut dyn SpecCollector,
    options: &'a TranslationOptions,
}

impl<'tu> BuildModule<'_, 'tu> {
    fn visit(&mut self, decl: &'tu Decl, flags: Flags) {
        if !self.filter.should_translate(decl) {
            debug!("Skipping filtered {decl}");
            return;
        }
        if let Some(spec) = &decl.annotation {
            self.specs.add_specification(decl, spec);
        }

        match &decl.kind {
            DeclKind::Namespace { decls } | DeclKind::LinkageSpec { decls } => {
                for inner in decls {
                    self.visit(inner, flags);
                }
            }
            DeclKind::Record { members, .. } => {
                self.add(decl, flags);
                for member in members {
                    self.visit(member, flags);
                }
            }
            DeclKind::Enum { .. }
            | DeclKind::Typedef { .. }
            | DeclKind::Function { .. }
            | DeclKind::Var { .. } => self.add(decl, flags),
            DeclKind::ClassTemplate { pattern, specializations }
            | DeclKind::FunctionTemplate { pattern, specializations } => {
                if self.options.templates {
                    self.visit(pattern, flags.set_template());
                }
                if self.options.elaborate {
                    for spec in specializations {
                        self.visit(spec, flags.set_specialization());
                    }
                } else if !specializations.is_empty() {
                    debug!("Not elaborating {} specializations of {decl}", specializations.len());
                }
            }
            DeclKind::StaticAssert(assert) => self.module.add_assert(assert),
        }
    }

    fn add(&mut self, decl: &'tu Decl, flags: Flags) {
        if decl.is_definition() {
            self.module.add_definition(decl, flags);
        } else {
            self.module.add_declaration(decl, flags);
        }
    }
}
