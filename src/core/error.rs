use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Fetch-stage variants (`Http`, `Status`, `Data`, `Feed`, `Timeout`) are
/// normally absorbed into skip outcomes by the price and news fetchers.
/// `Config`, `Template` and `Io` are the ones that end a run.
#[derive(Debug, Error)]
pub enum BriefError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A feed body could be fetched but was neither RSS 2.0 nor Atom.
    #[error("feed parse error: {0}")]
    Feed(String),

    /// A request did not complete within its time budget.
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The feed source configuration is missing or malformed.
    #[error("config error: {0}")]
    Config(String),

    /// The HTML template failed to render.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl BriefError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
