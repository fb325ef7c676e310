//! Unit tests for the IR module

use super::*;

fn int32() -> Term {
    Term::token("T_int32")
}

#[test]
fn test_top_level_ctor_has_no_parens() {
    let t = Term::ctor("Qconst", vec![int32()]);
    assert_eq!(t.to_string(), "Qconst T_int32");
}

#[test]
fn test_nested_ctor_is_parenthesized() {
    let t = Term::ctor("Tptr", vec![Term::ctor("Qconst", vec![int32()])]);
    assert_eq!(t.to_string(), "Tptr (Qconst T_int32)");

    let arr = Term::ctor("Tarray", vec![Term::ctor("Tptr", vec![Term::token("Tchar")]), Term::Int(4)]);
    assert_eq!(arr.to_string(), "Tarray (Tptr Tchar) 4");
}

#[test]
fn test_list_elements() {
    let t = Term::List(vec![int32(), Term::ctor("Tptr", vec![Term::token("Tvoid")])]);
    assert_eq!(t.to_string(), "(T_int32 :: Tptr Tvoid :: nil)");
    assert_eq!(Term::List(vec![]).to_string(), "(nil)");
}

#[test]
fn test_literals() {
    assert_eq!(Term::string("ns::S").to_string(), "\"ns::S\"");
    assert_eq!(Term::Int(18446744073709551615).to_string(), "18446744073709551615");
    assert_eq!(Term::Bool(false).to_string(), "false");
}

#[test]
fn test_record() {
    let t = Term::record(vec![("q_const", Term::Bool(true)), ("q_volatile", Term::Bool(false))]);
    assert_eq!(t.to_string(), "{| q_const := true; q_volatile := false |}");
}

#[test]
fn test_emit_leaves_depth_unchanged() {
    let t = Term::ctor(
        "@Tfunction",
        vec![
            Term::token("CC_C"),
            Term::ctor("Qconst", vec![int32()]),
            Term::List(vec![Term::ctor("Tptr", vec![int32()]), Term::record(vec![("f", Term::Int(1))])]),
        ],
    );
    let mut p = TermPrinter::new();
    p.ctor("Dfunction", true);
    let before = p.depth();
    p.space();
    t.emit(&mut p);
    assert_eq!(p.depth(), before);
    p.end_ctor();
    assert_eq!(p.depth(), 0);
}
