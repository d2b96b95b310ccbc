//! Abstract Syntax Tree (AST) for the declaration surface of a Java file
//!
//! Only what a stripped factory needs is modelled: package, imports, the
//! top-level type headers and, for classes, their method signatures. Method
//! bodies, fields, constructors and nested types are consumed by the parser
//! and never reach this tree.

mod nodes;

pub use nodes::*;

use std::fmt;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of file
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Location at the start of a file
    pub fn start() -> Self {
        Self { line: 1, column: 1, offset: 0 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Span of source code (start and end locations)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Span covering a single location
    pub fn single(location: Location) -> Self {
        Self { start: location, end: location }
    }
}

/// AST node trait that all AST nodes implement
pub trait AstNode {
    /// Get the source span of this node
    fn span(&self) -> Span;
}

/// Root of a parsed Java source file
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub package_decl: Option<PackageDecl>,
    pub imports: Vec<ImportDecl>,
    pub type_decls: Vec<TypeDecl>,
    pub span: Span,
}

impl CompilationUnit {
    /// Package name, if the file declares one
    pub fn package_name(&self) -> Option<&str> {
        self.package_decl.as_ref().map(|p| p.name.as_str())
    }
}

impl AstNode for CompilationUnit {
    fn span(&self) -> Span {
        self.span
    }
}

