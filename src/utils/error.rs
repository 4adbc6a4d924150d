use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected page structure: {message}")]
    PageStructureError { message: String },

    #[error("No day-and-month token in date label '{label}'")]
    DateLabelError { label: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
