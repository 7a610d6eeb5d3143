use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
