//! Qualifier encodings
//!
//! Two encodings of the same `(const, volatile)` pair are used in different
//! IR positions: a four-way token and a field record. They are separate
//! grammars and are kept apart from the `Qconst`/`Qmut_volatile` wrappers
//! produced by type lowering.

use cpp2v_frontend::QualType;
use cpp2v_ir::Term;

/// `QM`, `QC`, `QV` or `QCV`
pub fn qualifier_token(is_const: bool, is_volatile: bool) -> Term {
    let token = match (is_const, is_volatile) {
        (false, false) => "QM",
        (true, false) => "QC",
        (false, true) => "QV",
        (true, true) => "QCV",
    };
    Term::token(token)
}

/// `{| q_const := _; q_volatile := _ |}` for the qualifiers of `qt`
pub fn qualifier_record(qt: &QualType) -> Term {
    Term::record(vec![
        ("q_const", Term::Bool(qt.is_const)),
        ("q_volatile", Term::Bool(qt.is_volatile)),
    ])
}
