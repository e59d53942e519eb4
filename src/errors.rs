use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("loan application is required")]
    MissingApplication,

    #[error("invalid currency code: {code:?} (expected three letters)")]
    InvalidCurrencyCode {
        code: String,
    },

    #[error("invalid application: {message}")]
    InvalidApplication {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

/// failures raised by a credit scorer while calculating a score
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("scoring service unavailable: {message}")]
    ServiceUnavailable {
        message: String,
    },

    #[error("score processing failed: {message}")]
    Processing {
        message: String,
    },
}

/// failures raised by a verification transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("could not connect to verification service: {message}")]
    ConnectionFailed {
        message: String,
    },

    #[error("verification service unavailable: {message}")]
    ServiceUnavailable {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
