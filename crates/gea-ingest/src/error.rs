use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Startup failures. The dashboard cannot render without its data, so
/// every variant is fatal; there is no retry path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing input file: {path}")]
    MissingFile { path: PathBuf },
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: missing expected column \"{column}\"")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path}: table has no data rows")]
    Empty { path: PathBuf },
}
