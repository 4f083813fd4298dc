use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid record at row {row}: field `{field}` {reason}")]
    Validation {
        row: usize,
        field: &'static str,
        reason: String,
    },

    #[error("dataset is empty: no classified records to chart")]
    EmptyDataset,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChartError {
    pub(crate) fn validation(row: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            row,
            field,
            reason: reason.into(),
        }
    }
}
