use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Drink not found: {0}")]
    DrinkNotFound(String),

    #[error("Duplicate drink in catalog: {0}")]
    DuplicateDrink(String),

    #[error("Duplicate food in catalog: {0}")]
    DuplicateFood(String),

    #[error("Drink '{drink}' is missing attribute '{attribute}'")]
    MissingAttribute { drink: String, attribute: &'static str },

    #[error("Drink '{0}' has a non-positive price")]
    NonPositivePrice(String),

    #[error("Column '{column}' missing from {file}")]
    MissingColumn { file: String, column: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// True for malformed-catalog conditions that abort startup.
    /// These are never surfaced per-request; no partial catalog is served.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Error::DuplicateDrink(_)
                | Error::DuplicateFood(_)
                | Error::MissingAttribute { .. }
                | Error::NonPositivePrice(_)
                | Error::MissingColumn { .. }
        )
    }
}
