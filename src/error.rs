//! Error types for building indexes and querying them.
//!
//! All fallible operations in this crate return [`Result`], carrying an
//! [`AnagramError`]. Failures are never folded into an empty result: an
//! empty query or an empty dictionary is always reported as an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    /// An index was built from zero dictionary words
    #[error("the dictionary is empty, there is nothing to index")]
    EmptyDictionary,

    /// The query holds no letters
    #[error("the query contains no letters")]
    EmptyQuery,

    /// The query is not a sanitized word (or could not be sanitized into one)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The dictionary source could not be read
    #[error("unable to load dictionary {path}: {source}")]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A cached index could not be written or read back
    #[error("index cache error: {0}")]
    Cache(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AnagramError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        AnagramError::InvalidInput(msg.into())
    }

    pub fn cache<S: Into<String>>(msg: S) -> Self {
        AnagramError::Cache(msg.into())
    }

    /// Is this a dictionary that could not be found at all?
    pub fn is_not_found(&self) -> bool {
        matches!(self, AnagramError::DictionaryLoad { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, AnagramError>;
