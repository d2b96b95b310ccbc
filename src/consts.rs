// Environment knobs read by Config::from_env
pub const ENV_ANCHOR_DIR: &str = "JSTUB_ANCHOR_DIR";
pub const ENV_SCRIPT_NAME: &str = "JSTUB_SCRIPT_NAME";
pub const ENV_YEAR: &str = "JSTUB_YEAR";
pub const ENV_ONLY_IF_CHANGED: &str = "JSTUB_ONLY_IF_CHANGED";

// Path segment the banner's script path is cut at
pub const DEFAULT_ANCHOR_DIR: &str = "chrome";

// Prefix of every method stub line inside the class body
pub const METHOD_INDENT: &str = "    ";
