//! Final file template

use crate::consts::METHOD_INDENT;

/// Everything the template needs, already rendered to strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFile {
    pub package: String,
    pub class_modifiers: String,
    pub class_name: String,
    /// `import a.b.C;` lines, already sorted
    pub imports: Vec<String>,
    /// Method stub lines without indentation
    pub stubs: Vec<String>,
    pub script_name: String,
    pub year: i32,
}

/// Marker that keeps review tooling from accepting the generated file as
/// hand-written code. Assembled at runtime so this source file itself does
/// not carry it.
fn do_not_submit() -> String {
    ["DO", "NOT", "SUBMIT"].join(" ")
}

/// Render the stub file text. Output ends with a single newline.
pub fn assemble(file: &StubFile) -> String {
    let methods = file
        .stubs
        .iter()
        .map(|stub| format!("{}{}", METHOD_INDENT, stub))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::new();
    out.push_str(&format!(
        "// Copyright {} The Chromium Authors. All rights reserved.\n",
        file.year
    ));
    out.push_str("// Use of this source code is governed by a BSD-style license that can be\n");
    out.push_str("// found in the LICENSE file.\n");
    out.push_str("//\n");
    out.push_str("// This file is autogenerated by\n");
    out.push_str(&format!("//     {}\n", file.script_name));
    out.push_str(&format!(
        "// Please do not change its content or use it in actual code ({}).\n",
        do_not_submit()
    ));
    out.push('\n');
    out.push_str(&format!("package {};\n", file.package));
    out.push('\n');
    out.push_str(&file.imports.join("\n"));
    out.push('\n');
    out.push('\n');
    out.push_str(&format!("{} class {} {{\n", file.class_modifiers, file.class_name));
    out.push_str(&methods);
    out.push('\n');
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StubFile {
        StubFile {
            package: "org.chromium.chrome.browser.foo".to_string(),
            class_modifiers: "public".to_string(),
            class_name: "FooFactory".to_string(),
            imports: vec!["import java.util.List;".to_string()],
            stubs: vec!["public List<String> bar (int x) { return null; }".to_string()],
            script_name: "chrome/android/features/jstub".to_string(),
            year: 2019,
        }
    }

    #[test]
    fn renders_full_template() {
        let expected = "\
// Copyright 2019 The Chromium Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// This file is autogenerated by
//     chrome/android/features/jstub
// Please do not change its content or use it in actual code (MARKER).

package org.chromium.chrome.browser.foo;

import java.util.List;

public class FooFactory {
    public List<String> bar (int x) { return null; }
}
";
        assert_eq!(assemble(&sample()), expected.replace("MARKER", &do_not_submit()));
    }

    #[test]
    fn empty_import_block_leaves_blank_lines() {
        let mut file = sample();
        file.imports.clear();
        let text = assemble(&file);
        assert!(text.contains("package org.chromium.chrome.browser.foo;\n\n\n\npublic class FooFactory {\n"));
    }

    #[test]
    fn each_stub_is_indented_on_its_own_line() {
        let mut file = sample();
        file.stubs = vec![
            "public static void a () { return ; }".to_string(),
            "public static int b () { return 0; }".to_string(),
        ];
        let text = assemble(&file);
        assert!(text.contains(
            "{\n    public static void a () { return ; }\n    public static int b () { return 0; }\n}\n"
        ));
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn marker_and_year_appear_in_header() {
        let mut file = sample();
        file.year = 2031;
        let text = assemble(&file);
        assert!(text.starts_with("// Copyright 2031 The Chromium Authors."));
        assert!(text.contains(&format!("({})", do_not_submit())));
    }
}
