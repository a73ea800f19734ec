use super::wire::{self, API_KEY_HEADER, TransactionPayload};
use super::{Acquirer, AcquirerEndpoint};
use crate::domain::payment::Payment;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Stone acquirer adapter.
///
/// Posts the flat transaction payload authenticated with the `Api-Key`
/// header and reads the `{code, message}` envelope back.
#[derive(Debug, Clone)]
pub struct Stone {
    endpoint: AcquirerEndpoint,
}

impl Stone {
    pub const NAME: &'static str = "stone";

    pub fn new(endpoint: AcquirerEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl Acquirer for Stone {
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
