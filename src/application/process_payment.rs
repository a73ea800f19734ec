use crate::domain::card::Card;
use crate::domain::payment::PaymentStatus;
use crate::domain::ports::{CardFinderBox, PaymentGatewayBox};
use crate::domain::purchase::Purchase;
use crate::domain::store::Store;
use crate::domain::transaction::{AcquirerSelector, Transaction};
use crate::domain::validation::Validate;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

/// Raw field values of a payment request, as handed over by the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessPaymentInput {
    pub card_token: String,
    pub purchase_value: Decimal,
    pub purchase_items: Vec<String>,
    pub purchase_installments: i32,
    pub store_identification: String,
    pub store_address: String,
    pub store_cep: String,
    pub acquirer_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessPaymentOutput {
    pub payment_status: PaymentStatus,
}

/// The process-payment use case.
///
/// Runs three stages in order, stopping at the first error:
/// 1. find the card by token,
/// 2. assemble and validate the transaction,
/// 3. hand it to the payment gateway.
///
/// Errors from the card finder and the gateway are returned untouched; they
/// are already classified where they originate.
pub struct ProcessPayment {
    card_finder: CardFinderBox,
    gateway: PaymentGatewayBox,
}

impl ProcessPayment {
    pub fn new(card_finder: CardFinderBox, gateway: PaymentGatewayBox) -> Self {
        Self {
            card_finder,
            gateway,
        }
    }

    pub async fn execute(&self, input: ProcessPaymentInput) -> Result<ProcessPaymentOutput> {
        let card = self.card_finder.find(&input.card_token).await?;
        debug!(brand = %card.brand, "card found");

        let transaction = assemble(card, input);
        transaction.validate()?;

        let payment = self.gateway.process(&transaction).await?;
        info!(
            acquirer = %transaction.acquirer.name,
            status = %payment.status,
            "payment processed"
        );

        Ok(ProcessPaymentOutput {
            payment_status: payment.status,
        })
    }
}

fn assemble(card: Card, input: ProcessPaymentInput) -> Transaction {
    Transaction::new(
        card,
        Purchase::new(
            input.purchase_value,
            input.purchase_items,
            input.purchase_installments,
        ),
        Store::new(
            input.store_identification,
            input.store_address,
            input.store_cep,
        ),
        AcquirerSelector::new(input.acquirer_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Payment;
    use crate::domain::ports::{CardFinder, PaymentGateway};
    use crate::error::PaymentError;
    use crate::infrastructure::in_memory::InMemoryCardStore;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Accepts everything and counts submissions.
    struct AcceptingGateway {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PaymentGateway for AcceptingGateway {
        async fn process(&self, _transaction: &Transaction) -> Result<Payment> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Payment::paid("pay-1"))
        }
    }

    /// Finds every token and counts lookups.
    struct CountingFinder {
        lookups: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CardFinder for CountingFinder {
        async fn find(&self, token: &str) -> Result<Card> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(Card::new(token, "Holder", "01/2030", "Brand"))
        }
    }

    fn input(token: &str) -> ProcessPaymentInput {
        ProcessPaymentInput {
            card_token: token.to_string(),
            purchase_value: dec!(4.99),
            purchase_items: vec!["Item 1".into(), "Item 2".into()],
            purchase_installments: 2,
            store_identification: "S1".into(),
            store_address: "A1".into(),
            store_cep: "C1".into(),
            acquirer_name: "stone".into(),
        }
    }

    async fn use_case() -> (ProcessPayment, Arc<AtomicUsize>) {
        let cards = InMemoryCardStore::new();
        cards
            .insert(Card::new("T1", "Holder", "01/2030", "Brand"))
            .await;
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = AcceptingGateway {
            calls: calls.clone(),
        };
        (ProcessPayment::new(Box::new(cards), Box::new(gateway)), calls)
    }

    #[tokio::test]
    async fn test_valid_request_is_paid() {
        let (use_case, calls) = use_case().await;
        let output = use_case.execute(input("T1")).await.unwrap();
        assert_eq!(output.payment_status, PaymentStatus::Paid);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_transaction_is_never_dispatched() {
        let (use_case, calls) = use_case().await;
        let mut request = input("T1");
        request.store_cep.clear();

        let err = use_case.execute(request).await.unwrap_err();
        assert!(matches!(err, PaymentError::Validation(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_card_stops_before_validation() {
        let (use_case, calls) = use_case().await;
        let mut request = input("missing");
        request.purchase_value = dec!(0);

        let err = use_case.execute(request).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotFound(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_card_is_looked_up_before_validation() {
        let lookups = Arc::new(AtomicUsize::new(0));
        let calls = Arc::new(AtomicUsize::new(0));
        let use_case = ProcessPayment::new(
            Box::new(CountingFinder {
                lookups: lookups.clone(),
            }),
            Box::new(AcceptingGateway {
                calls: calls.clone(),
            }),
        );

        let mut request = input("T1");
        request.purchase_value = dec!(0);
        request.purchase_items = vec![String::new()];
        request.purchase_installments = 0;

        match use_case.execute(request).await.unwrap_err() {
            PaymentError::Validation(e) => assert_eq!(e.messages().len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
