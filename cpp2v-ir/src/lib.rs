//! cpp2v - Intermediate Representation
//! 
//! The IR consumed by the proof assistant is a small term language:
//! constructor applications, lists, field records and literals.
//! 
//! ## Architecture
//! 
//! - `term` - the in-memory `Term` tree built by lowering
//! - `printer` - the `TermPrinter` text sink that serializes terms and
//!   tracks nesting depth

pub use self::term::Term;
pub use self::printer::TermPrinter;

mod term;
mod printer;

#[cfg(test)]
mod tests;
