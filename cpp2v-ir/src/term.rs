//! IR Terms
//!
//! A `Term` is a value tree; nothing is written until it is emitted into a
//! `TermPrinter`, so a term is balanced by construction.

use std::fmt;
use crate::printer::TermPrinter;

/// One node of the output term language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Constructor applied to one or more arguments
    Ctor { name: String, args: Vec<Term> },
    /// Ordered list, printed as `(a :: b :: nil)`
    List(Vec<Term>),
    /// Field record, printed as `{| f := a; g := b |}`
    Record(Vec<(String, Term)>),
    /// Quoted string literal
    Str(String),
    /// Decimal integer literal
    Int(u64),
    Bool(bool),
    /// Fixed token: nullary constructors such as `Tbool` or `W32`
    Token(String),
}

impl Term {
    pub fn ctor(name: &str, args: Vec<Term>) -> Self {
        Term::Ctor { name: name.to_string(), args }
    }

    pub fn token(name: &str) -> Self {
        Term::Token(name.to_string())
    }

    pub fn string(s: &str) -> Self {
        Term::Str(s.to_string())
    }

    pub fn record(fields: Vec<(&str, Term)>) -> Self {
        Term::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    /// Write this term into the printer. Constructor applications that
    /// appear as arguments are parenthesized.
    pub fn emit(&self, p: &mut TermPrinter) {
        self.emit_at(p, false);
    }

    /// Write this term in argument position
    pub fn emit_arg(&self, p: &mut TermPrinter) {
        self.emit_at(p, true);
    }

    fn emit_at(&self, p: &mut TermPrinter, as_arg: bool) {
        let depth = p.depth();
        match self {
            Term::Ctor { name, args } if args.is_empty() => p.text(name),
            Term::Ctor { name, args } => {
                p.ctor(name, as_arg);
                for arg in args {
                    p.space();
                    arg.emit_at(p, true);
                }
                if as_arg {
                    p.end_ctor();
                }
            }
            Term::List(items) => {
                p.begin_list();
                for item in items {
                    item.emit_at(p, false);
                    p.cons();
                }
                p.end_list();
            }
            Term::Record(fields) => {
                p.begin_record();
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        p.field_separator();
                    }
                    p.record_field(name);
                    value.emit_at(p, false);
                }
                p.end_record();
            }
            Term::Str(s) => p.string(s),
            Term::Int(n) => p.int(*n),
            Term::Bool(b) => p.boolean(*b),
            Term::Token(t) => p.text(t),
        }
        debug_assert_eq!(depth, p.depth(), "unbalanced emission of {self:?}");
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut p = TermPrinter::new();
        self.emit(&mut p);
        write!(f, "{}", p.output())
    }
}
