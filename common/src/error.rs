//! Tipos de erro

use thiserror::Error;

/// Erro comum
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dia duplicado no resultado da análise: {0}")]
    DuplicateDay(u32),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
