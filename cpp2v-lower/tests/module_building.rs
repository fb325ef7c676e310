//! Walking translation units into modules

use cpp2v_common::{Signedness, SourceLocation, TagKind};
use cpp2v_frontend::{
    AcceptAll, AnnotationCollector, BuiltinType, Decl, DeclKind, LocationFilter, QualType,
    StaticAssertDecl, TranslationUnit, Type,
};
use cpp2v_lower::{build_module, Module, TranslationOptions};
use pretty_assertions::assert_eq;

fn int() -> QualType {
    Type::Builtin(BuiltinType::int(32, Signedness::Signed)).into()
}

fn var(id: u32, name: &str, is_definition: bool) -> Decl {
    Decl::new(id, name, DeclKind::Var { ty: int(), is_definition })
}

fn record(id: u32, name: &str, members: Vec<Decl>) -> Decl {
    Decl::new(id, name, DeclKind::Record { tag: TagKind::Struct, is_definition: true, members })
}

fn names(list: &[&Decl]) -> Vec<String> {
    list.iter().map(|d| d.qualified_name.clone()).collect()
}

/// `template <class T> struct Box { T value; };` with one instantiation
fn box_template() -> Decl {
    Decl::new(10, "Box", DeclKind::ClassTemplate {
        pattern: Box::new(record(11, "Box", vec![])),
        specializations: vec![record(12, "Box<int>", vec![])],
    })
}

fn build<'tu>(tu: &'tu TranslationUnit, options: &TranslationOptions) -> (Module<'tu>, AnnotationCollector) {
    let mut module = Module::new(options.trace_module_builder);
    let mut specs = AnnotationCollector::new();
    build_module(tu, &mut module, &AcceptAll, &mut specs, options);
    (module, specs)
}

#[test]
fn test_source_order_and_definition_split() {
    let mut tu = TranslationUnit::new("a.cpp");
    tu.add_decl(var(1, "x", false));
    tu.add_decl(var(2, "y", true));
    tu.add_decl(Decl::new(3, "id_t", DeclKind::Typedef { underlying: int() }));
    tu.add_decl(var(4, "z", false));

    let (module, _) = build(&tu, &TranslationOptions::default());
    assert_eq!(names(module.declarations()), ["x", "z"]);
    assert_eq!(names(module.definitions()), ["y", "id_t"]);
    assert!(module.template_declarations().is_empty());
    assert!(module.template_definitions().is_empty());
}

#[test]
fn test_namespaces_and_records_are_flattened() {
    let mut tu = TranslationUnit::new("a.cpp");
    tu.add_decl(Decl::new(1, "ns", DeclKind::Namespace {
        decls: vec![
            record(2, "ns::S", vec![
                Decl::new(3, "ns::S::get", DeclKind::Function { ty: int(), is_definition: false }),
                record(4, "ns::S::Inner", vec![]),
            ]),
            Decl::new(5, "", DeclKind::LinkageSpec { decls: vec![var(6, "ns::c_var", true)] }),
        ],
    }));

    let (module, _) = build(&tu, &TranslationOptions::default());
    assert_eq!(names(module.definitions()), ["ns::S", "ns::S::Inner", "ns::c_var"]);
    assert_eq!(names(module.declarations()), ["ns::S::get"]);
}

#[test]
fn test_templates_follow_options() {
    let mut tu = TranslationUnit::new("box.cpp");
    tu.add_decl(box_template());

    let (module, _) = build(&tu, &TranslationOptions::default());
    assert_eq!(names(module.definitions()), ["Box<int>"]);
    assert!(module.template_definitions().is_empty());

    let (module, _) = build(&tu, &TranslationOptions::new().with_templates(true));
    assert_eq!(names(module.template_definitions()), ["Box"]);
    assert_eq!(names(module.definitions()), ["Box<int>"]);

    let (module, _) = build(&tu, &TranslationOptions::new().with_elaborate(false));
    assert!(module.is_empty());
}

#[test]
fn test_nested_template_inside_pattern_stays_in_template_bucket() {
    let inner = Decl::new(20, "Outer::Inner", DeclKind::ClassTemplate {
        pattern: Box::new(record(21, "Outer::Inner", vec![])),
        specializations: vec![record(22, "Outer::Inner<char>", vec![])],
    });
    let outer = Decl::new(23, "Outer", DeclKind::ClassTemplate {
        pattern: Box::new(record(24, "Outer", vec![inner])),
        specializations: vec![],
    });
    let mut tu = TranslationUnit::new("nested.cpp");
    tu.add_decl(outer);

    let (module, _) = build(&tu, &TranslationOptions::new().with_templates(true));
    assert_eq!(
        names(module.template_definitions()),
        ["Outer", "Outer::Inner", "Outer::Inner<char>"]
    );
    assert!(module.definitions().is_empty());
}

#[test]
fn test_static_asserts_are_collected() {
    let mut tu = TranslationUnit::new("a.cpp");
    tu.add_decl(Decl::new(1, "", DeclKind::StaticAssert(StaticAssertDecl {
        message: Some("first".into()),
        location: None,
    })));
    tu.add_decl(record(2, "S", vec![Decl::new(3, "", DeclKind::StaticAssert(StaticAssertDecl {
        message: None,
        location: None,
    }))]));

    let (module, _) = build(&tu, &TranslationOptions::default());
    assert_eq!(module.asserts().len(), 2);
    assert_eq!(module.asserts()[0].message.as_deref(), Some("first"));
    assert_eq!(module.len(), 3);
}

#[test]
fn test_annotations_reach_spec_collector() {
    let mut tu = TranslationUnit::new("a.cpp");
    tu.add_decl(var(1, "plain", true));
    tu.add_decl(
        Decl::new(2, "ns::f", DeclKind::Function { ty: int(), is_definition: true })
            .with_annotation("f_spec"),
    );

    let (module, specs) = build(&tu, &TranslationOptions::default());
    assert_eq!(module.definitions().len(), 2);
    assert_eq!(specs.entries().len(), 1);
    assert_eq!(specs.entries()[0].name, "ns::f");
    assert_eq!(specs.entries()[0].spec, "f_spec");
}

#[test]
fn test_location_filter_skips_other_files() {
    let here = SourceLocation::new("main.cpp", 3, 1);
    let there = SourceLocation::new("/usr/include/stdio.h", 40, 1);

    let mut tu = TranslationUnit::new("main.cpp");
    tu.add_decl(var(1, "from_header", true).with_location(there).with_annotation("ignored"));
    tu.add_decl(Decl::new(2, "app", DeclKind::Namespace {
        decls: vec![var(3, "app::local", true).with_location(here)],
    }));

    let filter = LocationFilter::new(vec!["main.cpp".to_string()]);
    let mut module = Module::new(false);
    let mut specs = AnnotationCollector::new();
    build_module(&tu, &mut module, &filter, &mut specs, &TranslationOptions::default());

    assert_eq!(names(module.definitions()), ["app::local"]);
    assert!(specs.is_empty());
}
