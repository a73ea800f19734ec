//! JSON shapes shared by the acquirer brands and the helpers that move them
//! over HTTP.

use super::AcquirerEndpoint;
use crate::domain::payment::Payment;
use crate::domain::transaction::Transaction;
use crate::domain::validation::Validate;
use crate::error::{PaymentError, Result};
use reqwest::{Client, Request, Response, StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Header every brand authenticates with.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Flat transaction payload posted to an acquirer.
#[derive(Debug, Serialize)]
pub struct TransactionPayload<'a> {
    pub card_token: &'a str,
    pub card_holder: &'a str,
    pub card_expiration: &'a str,
    pub card_brand: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub purchase_value: Decimal,
    pub purchase_items: &'a [String],
    pub purchase_installments: i32,
    pub store_identification: &'a str,
    pub store_address: &'a str,
    pub store_cep: &'a str,
    pub store_name: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionPayload<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            card_token: &tx.card.token,
            card_holder: &tx.card.holder,
            card_expiration: &tx.card.expiration,
            card_brand: &tx.card.brand,
            purchase_value: tx.purchase.value,
            purchase_items: &tx.purchase.items,
            purchase_installments: tx.purchase.installments,
            store_identification: &tx.store.identification,
            store_address: &tx.store.address,
            store_cep: &tx.store.cep,
            store_name: &tx.acquirer.name,
        }
    }
}

/// `{code, message}` answer. On success `message` is the payment id; on
/// failure it is the rejection reason and `code` the acquirer's error code,
/// `0` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Builds an authenticated JSON `POST` to `endpoint`.
pub fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    endpoint: &AcquirerEndpoint,
    auth_header: &str,
    body: &T,
) -> Result<Request> {
    client
        .post(endpoint.url.clone())
        .header(auth_header, &endpoint.api_key)
        .json(body)
        .build()
        .map_err(|e| {
            error!(url = %endpoint.url, error = %e, "failed to build acquirer request");
            PaymentError::internal(e)
        })
}

/// Drains the response body and parses it as an envelope.
pub async fn read_envelope(response: Response) -> Result<(StatusCode, ResponseEnvelope)> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        error!(%status, error = %e, "failed to read acquirer response");
        PaymentError::internal(e)
    })?;
    let envelope = serde_json::from_slice(&body).map_err(|e| {
        error!(%status, error = %e, "acquirer response is not a valid envelope");
        PaymentError::internal(e)
    })?;
    Ok((status, envelope))
}

/// Interprets an envelope: anything but `200 OK` is a rejection.
pub fn into_payment(status: StatusCode, envelope: ResponseEnvelope) -> Result<Payment> {
    if status != StatusCode::OK {
        return Err(PaymentError::acquirer(envelope.code, envelope.message));
    }

    let payment = Payment::paid(envelope.message);
    payment.validate().map_err(|e| {
        error!(error = %e, "acquirer accepted the transaction but returned an invalid payment");
        PaymentError::internal(e)
    })?;
    Ok(payment)
}
