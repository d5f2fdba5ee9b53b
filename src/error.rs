use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixError {
    #[error("pix key must be non-empty and at most 77 characters")]
    EmptyOrInvalidKey,
    #[error("recipient name is empty after normalization")]
    InvalidRecipientName,
    #[error("recipient city is empty after normalization")]
    InvalidRecipientCity,
    #[error("amount must be positive and at most 999999999.99")]
    InvalidAmount,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
