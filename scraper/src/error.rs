use crate::imports::*;
use ::std::io;

/// Errors that abort a wait times update. Rows that don't match their table's header are not errors; they are
/// skipped while parsing.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Failed to fetch traffic conditions page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Expected at least two tables for USA and Canada; found {found}")]
    MissingTables { found: usize },

    #[error("Expected a header row in the {direction} table")]
    MissingHeaderRow { direction: Direction },

    #[error("Failed to read traffic conditions HTML from {path:?}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write wait times JSON to {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
