use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or ill-typed run parameters; detected before any state exists
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed configuration snapshot file
    #[error("{file}:{line}: bad configuration snapshot: {message}")]
    Cnf {
        file: String,
        line: usize,
        message: String,
    },

    /// Pair separation below the potential's overlap threshold; always fatal
    #[error("particle overlap in {context} configuration")]
    Overlap { context: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
