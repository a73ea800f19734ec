use crate::acquirer::{Acquirer, AcquirerBox};
use crate::domain::payment::Payment;
use crate::domain::ports::PaymentGateway;
use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tracing::{error, info, warn};

pub const ACQUIRER_IS_INVALID: &str = "acquirer is invalid";

/// Routes transactions to the acquirer they name.
///
/// The registry is fixed once [`AcquirerServiceBuilder::build`] returns, so
/// concurrent `process` calls only ever read it. The `reqwest::Client` is
/// shared by every call and pools connections internally.
pub struct AcquirerService {
    client: Client,
    acquirers: HashMap<String, AcquirerBox>,
}

impl AcquirerService {
    pub fn builder() -> AcquirerServiceBuilder {
        AcquirerServiceBuilder::default()
    }

    /// Names of the registered acquirers, sorted.
    pub fn acquirers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.acquirers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Default)]
pub struct AcquirerServiceBuilder {
    client: Option<Client>,
    acquirers: HashMap<String, AcquirerBox>,
}

impl AcquirerServiceBuilder {
    /// Uses `client` for outbound calls instead of a default one.
    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Registers an adapter under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn acquirer<A: Acquirer + 'static>(mut self, acquirer: A) -> Self {
        self.acquirers
            .insert(acquirer.name().to_string(), Box::new(acquirer));
        self
    }

    pub fn build(self) -> AcquirerService {
        AcquirerService {
            client: self.client.unwrap_or_default(),
            acquirers: self.acquirers,
        }
    }
}

#[async_trait]
impl PaymentGateway for AcquirerService {
    async fn process(&self, transaction: &Transaction) -> Result<Payment> {
        let name = transaction.acquirer.name.as_str();
        let Some(acquirer) = self.acquirers.get(name) else {
            warn!(acquirer = name, "no acquirer registered under this name");
            return Err(PaymentError::not_found(ACQUIRER_IS_INVALID));
        };

        let request = acquirer.build_request(&self.client, transaction)?;
        info!(acquirer = name, url = %request.url(), "submitting transaction");

        let response = self.client.execute(request).await.map_err(|e| {
            error!(acquirer = name, error = %e, "acquirer request failed");
            PaymentError::internal(e)
        })?;

        let result = acquirer.extract_result(response).await;
        match &result {
            Ok(payment) => info!(
                acquirer = name,
                payment = %payment.id,
                status = %payment.status,
                "transaction processed"
            ),
            Err(PaymentError::Acquirer { code, message }) => warn!(
                acquirer = name,
                code = *code,
                message = message.as_str(),
                "transaction rejected"
            ),
            Err(_) => {}
        }
        result
    }
}
