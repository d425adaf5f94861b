use thiserror::Error;

pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// `position` is the zero-based index of the word in the input collection.
    #[error("invalid word {word:?} at position {position}: words must be non-empty and use only a-z")]
    InvalidWord { word: String, position: usize },

    #[error("invalid word {word:?} on line {line}: words must use only a-z")]
    InvalidLine { word: String, line: usize },

    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("{}", .0)]
    Io(#[from] std::io::Error),

    #[error("{}", .0)]
    Json(#[from] serde_json::Error),
}
