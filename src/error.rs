use std::path::PathBuf;

use thiserror::Error;

/// Failures turning a game description into a playable [`crate::Game`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read game model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed game model {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("game model has no goats")]
    NoGoats,

    #[error("totem name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("totems {first} and {second} both occupy ({row}, {col})")]
    Overlap {
        first: String,
        second: String,
        row: isize,
        col: isize,
    },
}
