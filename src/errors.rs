use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a dictionary source. Searching itself cannot fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open dictionary {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read dictionary line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("dictionary line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}
