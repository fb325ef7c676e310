//! Module builder
//!
//! Accumulates the declarations, definitions and static assertions found
//! while walking a translation unit. Each sequence keeps encounter order,
//! which the consumer relies on for declare-before-use checking.

use cpp2v_frontend::{Decl, StaticAssertDecl};
use log::trace;

/// Where a declaration was encountered
///
/// A monotone two-bit lattice: bits can be set but never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    in_template: bool,
    /// Explicit specialization or implicit instantiation
    in_specialization: bool,
}

impl Flags {
    /// The bottom of the lattice
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_template(self) -> Self {
        Self { in_template: true, ..self }
    }

    pub fn set_specialization(self) -> Self {
        Self { in_specialization: true, ..self }
    }

    pub fn in_template(&self) -> bool {
        self.in_template
    }

    pub fn in_specialization(&self) -> bool {
        self.in_specialization
    }

    pub fn none(&self) -> bool {
        !self.in_template && !self.in_specialization
    }
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Declaration,
    Definition,
}

/// The declarations of one translation unit, bucketed for emission
#[derive(Debug)]
pub struct Module<'tu> {
    trace: bool,

    declarations: Vec<&'tu Decl>,
    definitions: Vec<&'tu Decl>,

    template_declarations: Vec<&'tu Decl>,
    template_definitions: Vec<&'tu Decl>,

    asserts: Vec<&'tu StaticAssertDecl>,
}

impl<'tu> Module<'tu> {
    pub fn new(trace: bool) -> Self {
        Self {
            trace,
            declarations: Vec::new(),
            definitions: Vec::new(),
            template_declarations: Vec::new(),
            template_definitions: Vec::new(),
            asserts: Vec::new(),
        }
    }

    pub fn add_declaration(&mut self, decl: &'tu Decl, flags: Flags) {
        self.add_decl(Entry::Declaration, decl, flags);
    }

    pub fn add_definition(&mut self, decl: &'tu Decl, flags: Flags) {
        self.add_decl(Entry::Definition, decl, flags);
    }

    pub fn add_assert(&mut self, assert: &'tu StaticAssertDecl) {
        if self.trace {
            trace!("[module] static_assert {:?}", assert.message);
        }
        self.asserts.push(assert);
    }

    pub fn declarations(&self) -> &[&'tu Decl] {
        &self.declarations
    }

    pub fn definitions(&self) -> &[&'tu Decl] {
        &self.definitions
    }

    pub fn template_declarations(&self) -> &[&'tu Decl] {
        &self.template_declarations
    }

    pub fn template_definitions(&self) -> &[&'tu Decl] {
        &self.template_definitions
    }

    pub fn asserts(&self) -> &[&'tu StaticAssertDecl] {
        &self.asserts
    }

    /// Total number of entries across all sequences
    pub fn len(&self) -> usize {
        self.declarations.len()
            + self.definitions.len()
            + self.template_declarations.len()
            + self.template_definitions.len()
            + self.asserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Only `in_template` selects the bucket; `in_specialization` is traced
    fn add_decl(&mut self, entry: Entry, decl: &'tu Decl, flags: Flags) {
        let (bucket, list) = match (entry, flags.in_template()) {
            (Entry::Declaration, false) => ("declaration", &mut self.declarations),
            (Entry::Declaration, true) => ("template declaration", &mut self.template_declarations),
            (Entry::Definition, false) => ("definition", &mut self.definitions),
            (Entry::Definition, true) => ("template definition", &mut self.template_definitions),
        };
        if self.trace {
            trace!(
                "[module] {bucket}: {decl} (template={}, specialization={})",
                flags.in_template(),
                flags.in_specialization()
            );
        }
        list.push(decl);
    }
}
