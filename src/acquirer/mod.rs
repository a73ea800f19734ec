//! Acquirer adapters.
//!
//! Each supported acquirer brand implements [`Acquirer`]: it knows how to turn
//! a [`Transaction`] into that brand's HTTP request and how to read the brand's
//! response back into a [`Payment`]. The dispatch service only ever sees the
//! trait, so adding a brand means one new adapter and one registration.

mod cielo;
mod rede;
mod stone;
pub mod wire;

pub use cielo::Cielo;
pub use rede::Rede;
pub use stone::Stone;

use crate::domain::payment::Payment;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::fmt;
use url::Url;

/// Where an acquirer lives and the key it expects.
///
/// `Debug` redacts the key.
#[derive(Clone)]
pub struct AcquirerEndpoint {
    pub url: Url,
    pub api_key: String,
}

impl AcquirerEndpoint {
    pub fn new(url: Url, api_key: impl Into<String>) -> Self {
        Self {
            url,
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for AcquirerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcquirerEndpoint")
            .field("url", &self.url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
pub trait Acquirer: Send + Sync {
    /// Registry key; matched against the transaction's acquirer name.
    fn name(&self) -> &str;

    /// Builds the outbound request. Failures are `PaymentError::Internal`.
    fn build_request(&self, client: &Client, transaction: &Transaction) -> Result<Request>;

    /// Reads the acquirer's answer.
    ///
    /// A rejection becomes `PaymentError::Acquirer` with the acquirer's own
    /// code and message. An unreadable body, or a success payload that does
    /// not yield a valid `Payment`, is `PaymentError::Internal`. The response
    /// is consumed, so its connection is released however this returns.
    async fn extract_result(&self, response: Response) -> Result<Payment>;
}

pub type AcquirerBox = Box<dyn Acquirer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_debug_redacts_key() {
        let endpoint = AcquirerEndpoint::new(
            Url::parse("http://acquirer.local/stone").unwrap(),
            "super-secret",
        );
        let debug = format!("{endpoint:?}");
        assert!(debug.contains("acquirer.local"));
        assert!(!debug.contains("super-secret"));
    }
}
