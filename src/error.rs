use std::fmt;
use thiserror::Error;

/// Message returned to callers in place of any internal failure detail.
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Status answered for an acquirer rejection whose own code is not a valid
/// HTTP status.
pub const BAD_GATEWAY: u16 = 502;

/// An ordered list of violation messages collected by entity validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Turns a (possibly empty) violation list into a validation outcome.
    pub fn check(violations: Vec<String>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// The four error kinds that may cross the use-case boundary.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("acquirer rejected the transaction ({code}): {message}")]
    Acquirer { code: i64, message: String },
    #[error("internal error: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = PaymentError> = std::result::Result<T, E>;

impl PaymentError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn acquirer(code: i64, message: impl Into<String>) -> Self {
        Self::Acquirer {
            code,
            message: message.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Internal(err.into())
    }

    /// Status code the request boundary answers with for this error.
    ///
    /// Acquirer codes pass through when they are valid HTTP statuses and
    /// become [`BAD_GATEWAY`] otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::NotFound(_) => 404,
            Self::Acquirer { code, .. } => u16::try_from(*code)
                .ok()
                .filter(|code| (100..=599).contains(code))
                .unwrap_or(BAD_GATEWAY),
            Self::Internal(_) => 500,
        }
    }

    /// Messages safe to show to the caller. Internal causes are never exposed.
    pub fn public_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(err) => err.messages().to_vec(),
            Self::NotFound(message) => vec![message.clone()],
            Self::Acquirer { message, .. } => vec![message.clone()],
            Self::Internal(_) => vec![INTERNAL_SERVER_ERROR.to_string()],
        }
    }
}

impl From<csv::Error> for PaymentError {
    fn from(err: csv::Error) -> Self {
        Self::internal(err)
    }
}

impl From<std::io::Error> for PaymentError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        Self::internal(err)
    }
}
