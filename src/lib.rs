//! jstub: stripped Java factory generator
//!
//! Reads a Java source file holding one top-level class and writes a stub
//! of it: same package and class header, every public method kept with a
//! placeholder body, and only the imports those signatures use. Feature
//! modules compile against the stub to break circular dependencies on the
//! real factory.
//!
//! ## Architecture
//!
//! - **parser**: Lexical analysis and declaration-level parsing of Java source
//! - **ast**: Package, imports, class header and method signatures
//! - **stub**: Type naming/formatting, import filtering, stub rendering, file template
//! - **output**: Atomic file replacement
//! - **config**: `JSTUB_*` environment knobs
//!
//! ## Flow
//!
//! ```text
//! Java Source → Parser → AST → Import Index + Public Signatures → Template → output file
//! ```

pub mod ast;
pub mod config;
pub mod consts;
pub mod error;
pub mod output;
pub mod parser;
pub mod stub;

pub use config::Config;
pub use error::{Error, Result};

use std::path::Path;

/// Generate the stub text for a Java source without touching the filesystem
pub fn generate(source: &str, config: &Config) -> Result<String> {
    let unit = parser::parse_compilation_unit(source)?;
    let script_name = config.resolve_script_name()?;
    stub::strip(&unit, &script_name, config.resolve_year())
}

/// Generate the stub for `input` and write it to `output`.
///
/// The output file is only created or replaced once generation has fully
/// succeeded.
pub fn generate_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    log::info!("stripping {} -> {}", input.display(), output.display());

    let source = std::fs::read_to_string(input)?;
    let text = generate(&source, config)?;
    let written = crate::output::write_atomically(output, &text, config.only_if_changed)?;

    if !written {
        log::info!("{} is up to date", output.display());
    }
    Ok(())
}
