use thiserror::Error;

/// Recoverable pipeline failures. Callers translate `NoData` into the
/// sentinel display value; nothing here ever crashes an interaction.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no data for {country} in {year}")]
    NoData { country: String, year: i32 },
    #[error("column {0:?} not present in table")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
