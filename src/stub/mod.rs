//! Stripped factory generation
//!
//! Turns a parsed compilation unit with one top-level class into the text of
//! a stub class: same package, same class header, one placeholder body per
//! public method and only the imports those signatures need.

pub mod assemble;
pub mod format;
pub mod imports;
pub mod names;
pub mod script;
pub mod signature;

pub use assemble::{assemble, StubFile};
pub use imports::ImportIndex;
pub use script::{current_script_name, script_name};

use crate::ast::{join_modifiers, AstNode, ClassDecl, CompilationUnit, TypeDecl, TypeNode};
use crate::error::{Error, Result};

/// Error for a type shape the generator cannot reproduce faithfully
pub(crate) fn unsupported_type_node(node: &TypeNode) -> Error {
    Error::UnsupportedTypeNode {
        shape: format!("{} '{}'", node.shape(), node),
        line: node.span().start.line,
    }
}

/// The single top-level class of the unit
fn single_class(unit: &CompilationUnit) -> Result<&ClassDecl> {
    if unit.type_decls.len() != 1 {
        return Err(Error::MultipleTypes {
            count: unit.type_decls.len(),
        });
    }
    match &unit.type_decls[0] {
        TypeDecl::Class(class) => Ok(class),
        other => Err(Error::NotAClass {
            kind: other.kind().to_string(),
            name: other.name().to_string(),
        }),
    }
}

/// Produce the stub file text for `unit`.
///
/// Nothing is rendered unless every check passes, so a failing input never
/// yields a partial stub.
pub fn strip(unit: &CompilationUnit, script_name: &str, year: i32) -> Result<String> {
    let class = single_class(unit)?;
    if !class.type_params.is_empty() {
        return Err(Error::unsupported_feature(format!(
            "type parameters <{}> on class '{}'",
            class.type_params.join(", "),
            class.name
        )));
    }
    let package = unit.package_name().ok_or(Error::MissingPackage)?;

    let index = ImportIndex::build(&unit.imports)?;
    let needed = signature::needed_types(class)?;
    let imports = index.filter(&needed);
    let stubs = signature::method_stubs(class)?;

    log::debug!(
        "stripping {}.{}: {} public methods, {} imports kept",
        package,
        class.name,
        stubs.len(),
        imports.len()
    );

    Ok(assemble(&StubFile {
        package: package.to_string(),
        class_modifiers: join_modifiers(&class.modifiers),
        class_name: class.name.clone(),
        imports,
        stubs,
        script_name: script_name.to_string(),
        year,
    }))
}
