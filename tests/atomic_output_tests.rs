mod common;

use common::{init_logger, test_config, write_java};
use jstub::output::write_atomically;
use jstub::generate_file;

#[test]
fn failed_generation_keeps_previous_output() {
    init_logger();
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("Stub.java");
    std::fs::write(&output, "previous").expect("seed output");

    let input = write_java(dir.path(), "Bad.java", "package p; public interface I {}");
    assert!(generate_file(&input, &output, &test_config()).is_err());

    assert_eq!(std::fs::read_to_string(&output).expect("read"), "previous");
}

#[test]
fn regenerating_same_stub_leaves_file_untouched() {
    init_logger();
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_java(dir.path(), "A.java", "package p; public class A { public int n() { return 1; } }");
    let output = dir.path().join("AStub.java");

    generate_file(&input, &output, &test_config()).expect("first run");
    let text = std::fs::read_to_string(&output).expect("read");

    assert!(!write_atomically(&output, &text, true).expect("rewrite"));
    generate_file(&input, &output, &test_config()).expect("second run");
    assert_eq!(std::fs::read_to_string(&output).expect("read"), text);
}

#[test]
fn only_the_output_remains_in_directory() {
    init_logger();
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("gen");
    std::fs::create_dir(&out_dir).expect("mkdir");
    let input = write_java(dir.path(), "A.java", "package p; public class A {}");
    let output = out_dir.join("AStub.java");

    generate_file(&input, &output, &test_config()).expect("generate");

    let names: Vec<String> = std::fs::read_dir(&out_dir)
        .expect("list")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["AStub.java".to_string()]);
}
