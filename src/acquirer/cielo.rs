use super::wire::{self, API_KEY_HEADER, TransactionPayload};
use super::{Acquirer, AcquirerEndpoint};
use crate::domain::payment::Payment;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Cielo acquirer adapter.
#[derive(Debug, Clone)]
pub struct Cielo {
    endpoint: AcquirerEndpoint,
}

impl Cielo {
    pub const NAME: &'static str = "cielo";

    pub fn new(endpoint: AcquirerEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl Acquirer for Cielo {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn build_request(&self, client: &Client, transaction: &Transaction) -> Result<Request> {
        let payload = TransactionPayload::from(transaction);
        wire::post_json(client, &self.endpoint, API_KEY_HEADER, &payload)
    }

    async fn extract_result(&self, response: Response) -> Result<Payment> {
        let (status, envelope) = wire::read_envelope(response).await?;
        wire::into_payment(status, envelope)
    }
}
