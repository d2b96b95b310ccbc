use thiserror::Error;

/// Result type for jstub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the stub generator
///
/// Every variant is fatal: the generator never writes a partial or
/// best-effort stub.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Lexical error: {message}")]
    Lexical { message: String },

    #[error("Can only process Java files with one top-level class (found {count} type declarations)")]
    MultipleTypes { count: usize },

    #[error("Top-level {kind} '{name}' is not a class; only classes can be stripped")]
    NotAClass { kind: String, name: String },

    #[error("Missing package declaration")]
    MissingPackage,

    #[error("Unsupported {kind} import '{path}'")]
    UnsupportedImport { path: String, kind: ImportKind },

    #[error("Unsupported type node {shape} at line {line}")]
    UnsupportedTypeNode { shape: String, line: usize },

    #[error("Unsupported feature: {feature}")]
    UnsupportedFeature { feature: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Import forms the generator refuses to re-export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Static,
    Wildcard,
}

impl std::fmt::Display for ImportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportKind::Static => write!(f, "static"),
            ImportKind::Wildcard => write!(f, "wildcard"),
        }
    }
}

impl Error {
    /// Create a parse error with location information
    pub fn parse_error(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a lexical error
    pub fn lexical_error(message: impl Into<String>) -> Self {
        Self::Lexical { message: message.into() }
    }

    pub fn unsupported_feature(feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature { feature: feature.into() }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
