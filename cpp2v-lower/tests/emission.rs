//! End-to-end emission from a loaded translation unit

use cpp2v_frontend::{AcceptAll, AnnotationCollector, Frontend, QualifiedNameResolver};
use cpp2v_lower::{translate_unit, TranslationOptions};
use pretty_assertions::assert_eq;

const POINT_UNIT: &str = r#"
{
  "filename": "point.cpp",
  "decls": [
    {
      "id": 1, "name": "Point", "qualified_name": "geo::Point",
      "kind": { "Record": { "tag": "Struct", "is_definition": true, "members": [
        {
          "id": 2, "name": "norm", "qualified_name": "geo::Point::norm",
          "mangled": "_ZNK3geo5Point4normEv",
          "annotation": "norm_spec",
          "kind": { "Function": { "is_definition": false, "ty": { "ty": { "FunctionProto": {
            "ret": { "ty": { "Builtin": { "kind": "Floating", "bits": 64, "spelling": "double" } } }
          } } } } }
        }
      ] } }
    },
    {
      "id": 3, "name": "origin", "qualified_name": "geo::origin",
      "kind": { "Var": { "is_definition": true, "ty": {
        "ty": { "Record": { "decl": { "id": 1, "qualified_name": "geo::Point" } } },
        "is_const": true
      } } }
    },
    {
      "id": 4, "name": "",
      "kind": { "StaticAssert": { "message": "say \"hi\"" } }
    }
  ]
}
"#;

const EXPECTED: &str = "(* cpp2v: point.cpp *)

Definition declarations : list Decl :=
  (Dfunction \"_ZNK3geo5Point4normEv\" (@Tfunction CC_C (Tfloat W64) (nil)) ::
   nil).

Definition definitions : list Decl :=
  (Dstruct \"geo::Point\" ::
   Dvariable \"geo::origin\" (Qconst (Tnamed \"geo::Point\")) ::
   nil).

Definition template_declarations : list Decl :=
  (nil).

Definition template_definitions : list Decl :=
  (nil).

Definition static_asserts : list Decl :=
  (Dstatic_assert \"say \"\"hi\"\"\" ::
   nil).
";

#[test]
fn test_translate_point_unit() {
    let tu = Frontend::load_str(POINT_UNIT).unwrap();
    let mut specs = AnnotationCollector::new();
    let out = translate_unit(
        &tu,
        &AcceptAll,
        &mut specs,
        &QualifiedNameResolver,
        &TranslationOptions::default(),
    )
    .unwrap();

    assert_eq!(out, EXPECTED);
    assert_eq!(specs.render(), "(* geo::Point::norm *)\nnorm_spec\n\n");
}

#[test]
fn test_unsupported_type_produces_no_output() {
    let source = r#"
    {
      "filename": "bad.cpp",
      "decls": [
        { "id": 1, "name": "ok", "qualified_name": "ok",
          "kind": { "Var": { "is_definition": true,
            "ty": { "ty": { "Builtin": { "kind": "Bool", "bits": 8, "spelling": "bool" } } } } } },
        { "id": 2, "name": "v", "qualified_name": "v",
          "kind": { "Var": { "is_definition": true,
            "ty": { "ty": { "TemplateSpecialization": { "template_name": "std::vector" } } } } } }
      ]
    }"#;
    let tu = Frontend::load_str(source).unwrap();
    let mut specs = AnnotationCollector::new();
    let err = translate_unit(
        &tu,
        &AcceptAll,
        &mut specs,
        &QualifiedNameResolver,
        &TranslationOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_unsupported());
    assert!(err.to_string().contains("std::vector"));
}

#[test]
fn test_unsupported_calling_convention_is_fatal() {
    let source = r#"
    {
      "filename": "cc.cpp",
      "decls": [
        { "id": 1, "name": "f", "qualified_name": "f",
          "kind": { "Function": { "is_definition": true, "ty": { "ty": { "FunctionProto": {
            "calling_conv": "X86StdCall",
            "ret": { "ty": { "Builtin": { "kind": "Void", "bits": 0, "spelling": "void" } } }
          } } } } } }
      ]
    }"#;
    let tu = Frontend::load_str(source).unwrap();
    let err = translate_unit(
        &tu,
        &AcceptAll,
        &mut AnnotationCollector::new(),
        &QualifiedNameResolver,
        &TranslationOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_unsupported());
}
