use super::validation::{Validate, require};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PAYMENT_ID_IS_REQUIRED: &str = "payment id is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome an acquirer reported for a submitted transaction.
///
/// `id` is the acquirer's payment identifier. Payments are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn new(id: impl Into<String>, status: PaymentStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }

    pub fn paid(id: impl Into<String>) -> Self {
        Self::new(id, PaymentStatus::Paid)
    }
}

impl Validate for Payment {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&self.id, PAYMENT_ID_IS_REQUIRED, &mut violations);
        violations
    }
}
