use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("There is no invoice matching this payment")]
    NoMatchingInvoice,
    #[error("The invoice is in an invalid state, it has an amount of 0 and it has payments.")]
    InvalidInvoiceState,
    #[error("Amount overflow while applying payment to invoice {0}")]
    AmountOverflow(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
