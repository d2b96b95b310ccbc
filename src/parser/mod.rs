//! Parser module for Java source
//!
//! This module handles lexical analysis and parsing of `.java` files into the
//! declaration-level AST.

pub mod lexer;
pub mod parser;
pub mod error;

pub use lexer::Lexer;
pub use parser::Parser;
pub use error::ParseError;

use crate::ast::CompilationUnit;
use crate::error::Result;

/// Parse a Java source file into a compilation unit
pub fn parse_compilation_unit(source: &str) -> Result<CompilationUnit> {
    let unit = parser::parse(source)?;
    log::debug!(
        "parsed compilation unit: package={:?} imports={} types={}",
        unit.package_name(),
        unit.imports.len(),
        unit.type_decls.len()
    );
    Ok(unit)
}
