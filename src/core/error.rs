use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("no plan for {date}")]
    NotFound { date: NaiveDate },
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}

impl WellnessError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Machine-readable code used in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::InvalidInput(_) => "invalid_input",
            Self::CorruptRecord(_) => "corrupt_record",
        }
    }
}

pub type WellnessResult<T> = std::result::Result<T, WellnessError>;
