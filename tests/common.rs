// Common test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use jstub::Config;

pub const TEST_YEAR: i32 = 2019;
pub const TEST_SCRIPT: &str = "chrome/android/features/jstub";

/// Initialize logging once per test binary
pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Config with a fixed year and banner path so outputs are reproducible
pub fn test_config() -> Config {
    Config::default()
        .with_year(TEST_YEAR)
        .with_script_name(TEST_SCRIPT)
}

/// Write a Java source file into `dir` and return its path
pub fn write_java(dir: &Path, name: &str, source: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, source).expect("write java source");
    path
}
