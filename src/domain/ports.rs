use super::card::Card;
use super::payment::Payment;
use super::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;

/// Looks up stored cards by token.
///
/// Implementations report an unknown token as `PaymentError::NotFound` and
/// storage failures as `PaymentError::Internal`.
#[async_trait]
pub trait CardFinder: Send + Sync {
    async fn find(&self, token: &str) -> Result<Card>;
}

/// Submits a validated transaction and returns the acquirer's verdict.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process(&self, transaction: &Transaction) -> Result<Payment>;
}

pub type CardFinderBox = Box<dyn CardFinder>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
