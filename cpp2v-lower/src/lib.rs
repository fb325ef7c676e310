//! cpp2v - Lowering and emission
//!
//! This crate turns an elaborated translation unit into IR text:
//!
//! - Type lowering: every type node to its IR term
//! - Qualifier encodings used at other IR positions
//! - Module building: walking the unit and bucketing its declarations
//! - Emission of the bucketed module

pub mod types;
pub mod qualifiers;
pub mod options;
pub mod module;
pub mod build;
pub mod emit;

pub use types::{bitsize, TypeLowering};
pub use qualifiers::{qualifier_record, qualifier_token};
pub use options::TranslationOptions;
pub use module::{Flags, Module};
pub use build::build_module;
pub use emit::{assert_term, decl_term, print_module};

use cpp2v_common::Result;
use cpp2v_frontend::{Filter, NameResolver, SpecCollector, TranslationUnit};
use log::info;

/// Main entry point: walk `tu` and print the resulting module
///
/// Nothing is returned unless every declaration lowered successfully.
pub fn translate_unit(
    tu: &TranslationUnit,
    filter: &dyn Filter,
    specs: &mut dyn SpecCollector,
    names: &dyn NameResolver,
    options: &TranslationOptions,
) -> Result<String> {
    let mut module = Module::new(options.trace_module_builder);
    build_module(tu, &mut module, filter, specs, options);
    info!("Module for '{}' has {} entries", tu.filename, module.len());

    let lowering = TypeLowering::new(names);
    print_module(&tu.filename, &module, &lowering)
}
