//! Import index and import-block filtering

use std::collections::{BTreeSet, HashMap};

use crate::ast::ImportDecl;
use crate::error::{Error, ImportKind, Result};

/// Simple type name -> fully qualified import path
#[derive(Debug, Default)]
pub struct ImportIndex {
    paths: HashMap<String, String>,
}

impl ImportIndex {
    /// Index single-type imports by their simple name.
    ///
    /// Static and wildcard imports are rejected: the stub would either have
    /// to re-export them blindly or drop them, and both can change what the
    /// generated file binds to. A later import of the same simple name
    /// replaces an earlier one.
    pub fn build(imports: &[ImportDecl]) -> Result<Self> {
        let mut paths = HashMap::new();

        for import in imports {
            if import.is_static {
                return Err(Error::UnsupportedImport {
                    path: import.name.clone(),
                    kind: ImportKind::Static,
                });
            }
            if import.is_wildcard {
                return Err(Error::UnsupportedImport {
                    path: format!("{}.*", import.name),
                    kind: ImportKind::Wildcard,
                });
            }
            paths.insert(import.simple_name().to_string(), import.name.clone());
        }

        log::debug!("indexed {} imports", paths.len());
        Ok(Self { paths })
    }

    /// Import path bound to a simple name, if any
    pub fn get(&self, simple_name: &str) -> Option<&str> {
        self.paths.get(simple_name).map(String::as_str)
    }

    /// `import <path>;` lines for the needed names, sorted and deduplicated.
    ///
    /// Names without an entry are taken to be in `java.lang` or the file's
    /// own package and need no import.
    pub fn filter(&self, needed: &BTreeSet<String>) -> Vec<String> {
        needed
            .iter()
            .filter_map(|name| self.get(name))
            .map(|path| format!("import {};", path))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Location, Span};

    fn import(name: &str) -> ImportDecl {
        ImportDecl {
            name: name.to_string(),
            is_static: false,
            is_wildcard: false,
            span: Span::single(Location::start()),
        }
    }

    fn needed(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn index_keys_are_simple_names() {
        let index = ImportIndex::build(&[import("java.util.List"), import("org.chromium.base.Callback")])
            .expect("index");
        assert_eq!(index.get("List"), Some("java.util.List"));
        assert_eq!(index.get("Callback"), Some("org.chromium.base.Callback"));
        assert_eq!(index.get("String"), None);
    }

    #[test]
    fn last_import_of_a_simple_name_wins() {
        let index = ImportIndex::build(&[import("a.Thing"), import("b.Thing")]).expect("index");
        assert_eq!(index.get("Thing"), Some("b.Thing"));
    }

    #[test]
    fn filter_keeps_only_needed_names_sorted() {
        let index = ImportIndex::build(&[
            import("org.chromium.chrome.browser.tab.Tab"),
            import("android.content.Context"),
            import("java.util.List"),
        ])
        .expect("index");

        let lines = index.filter(&needed(&["Tab", "Context", "String", "int"]));
        assert_eq!(
            lines,
            vec![
                "import android.content.Context;".to_string(),
                "import org.chromium.chrome.browser.tab.Tab;".to_string(),
            ]
        );
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let index = ImportIndex::build(&[import("java.util.List")]).expect("index");
        assert!(index.filter(&needed(&["Map"])).is_empty());
    }

    #[test]
    fn static_import_is_rejected() {
        let mut decl = import("org.chromium.base.ThreadUtils.assertOnUiThread");
        decl.is_static = true;
        match ImportIndex::build(&[decl]) {
            Err(Error::UnsupportedImport { kind, .. }) => assert_eq!(kind, ImportKind::Static),
            other => panic!("expected unsupported import, got {:?}", other),
        }
    }

    #[test]
    fn wildcard_import_is_rejected() {
        let mut decl = import("java.util");
        decl.is_wildcard = true;
        let err = ImportIndex::build(&[import("a.B"), decl]).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported wildcard import 'java.util.*'");
    }
}
