use std::path::PathBuf;
use thiserror::Error;

/// Logo could not be read or decoded. Never fatal: callers render without it.
#[derive(Debug, Error)]
#[error("no se pudo cargar el logo {path}: {reason}")]
pub struct AssetError {
    pub path: PathBuf,
    pub reason: String,
}

impl AssetError {
    pub fn new(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AssetError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Typst compilation failed: {0}")]
    Typst(String),

    #[error("Error guardando el archivo Excel: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Error del registro de archivos: {0}")]
    Registry(String),
}

impl From<config::ConfigError> for DocumentError {
    fn from(error: config::ConfigError) -> Self {
        DocumentError::Config(error.to_string())
    }
}

pub type DocumentResult<T> = Result<T, DocumentError>;
