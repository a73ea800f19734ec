//! JSON request/response boundary.
//!
//! Decodes the nested request document into a [`ProcessPaymentInput`] and
//! renders use-case outcomes as reply documents carrying a status code.

use crate::application::process_payment::{ProcessPaymentInput, ProcessPaymentOutput};
use crate::domain::payment::PaymentStatus;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub card: CardRequest,
    pub purchase: PurchaseRequest,
    pub store: StoreRequest,
    pub acquirer: AcquirerRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardRequest {
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PurchaseRequest {
    pub value: Decimal,
    /// `None` only when the field is absent; an empty list is present.
    pub items: Option<Vec<String>>,
    pub installments: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreRequest {
    pub identification: String,
    pub address: String,
    pub cep: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AcquirerRequest {
    pub name: String,
}

/// Rejections raised before the use case runs.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("incomplete request: {}", .0.join("; "))]
    Incomplete(Vec<String>),
}

impl PaymentRequest {
    /// Reports absent fields, in document order, as
    /// `transaction <path> is required`. Zero numbers count as absent; an
    /// empty `items` list does not. Only presence is checked; the domain
    /// entities enforce the business rules.
    pub fn check(&self) -> Result<(), RequestError> {
        let present = [
            ("card token", !self.card.token.is_empty()),
            ("purchase value", !self.purchase.value.is_zero()),
            ("purchase items", self.purchase.items.is_some()),
            ("purchase installments", self.purchase.installments != 0),
            ("store identification", !self.store.identification.is_empty()),
            ("store address", !self.store.address.is_empty()),
            ("store cep", !self.store.cep.is_empty()),
            ("acquirer name", !self.acquirer.name.is_empty()),
        ];

        let missing: Vec<String> = present
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(field, _)| format!("transaction {field} is required"))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RequestError::Incomplete(missing))
        }
    }
}

impl From<PaymentRequest> for ProcessPaymentInput {
    fn from(request: PaymentRequest) -> Self {
        Self {
            card_token: request.card.token,
            purchase_value: request.purchase.value,
            purchase_items: request.purchase.items.unwrap_or_default(),
            purchase_installments: request.purchase.installments,
            store_identification: request.store.identification,
            store_address: request.store.address,
            store_cep: request.store.cep,
            acquirer_name: request.acquirer.name,
        }
    }
}

/// Parses and checks a request document.
pub fn decode_request(bytes: &[u8]) -> Result<ProcessPaymentInput, RequestError> {
    let request: PaymentRequest = serde_json::from_slice(bytes)?;
    request.check()?;
    Ok(request.into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReply {
    pub status: PaymentStatus,
}

impl From<ProcessPaymentOutput> for PaymentReply {
    fn from(output: ProcessPaymentOutput) -> Self {
        Self {
            status: output.payment_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub code: u16,
    pub message: Vec<String>,
}

impl From<&PaymentError> for ErrorReply {
    fn from(err: &PaymentError) -> Self {
        Self {
            code: err.status_code(),
            message: err.public_messages(),
        }
    }
}

impl From<RequestError> for ErrorReply {
    fn from(err: RequestError) -> Self {
        let message = match err {
            RequestError::Malformed(e) => vec![e.to_string()],
            RequestError::Incomplete(missing) => missing,
        };
        Self {
            code: BAD_REQUEST,
            message,
        }
    }
}
