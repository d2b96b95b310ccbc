//! Banner path of the generating executable

use std::path::{Path, MAIN_SEPARATOR};

use crate::error::Result;

/// Suffix of `path` starting at the first component equal to `anchor`.
///
/// When no component matches the whole path is returned, split and
/// re-joined on the platform separator.
pub fn script_name(path: &Path, anchor: &str) -> String {
    let rendered = path.to_string_lossy();
    let components: Vec<&str> = rendered.split(MAIN_SEPARATOR).collect();
    let start = components.iter().position(|c| *c == anchor).unwrap_or(0);
    let separator = MAIN_SEPARATOR.to_string();
    components[start..].join(separator.as_str())
}

/// Banner path of the running executable
pub fn current_script_name(anchor: &str) -> Result<String> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    let name = script_name(&exe, anchor);
    log::debug!("script name {} (from {})", name, exe.display());
    Ok(name)
}
