use super::card::Card;
use super::purchase::Purchase;
use super::store::Store;
use super::validation::{Validate, require};
use serde::{Deserialize, Serialize};

pub const ACQUIRER_NAME_IS_REQUIRED: &str = "acquirer name is required";

/// Names the acquirer a transaction should be submitted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquirerSelector {
    pub name: String,
}

impl AcquirerSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for AcquirerSelector {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&self.name, ACQUIRER_NAME_IS_REQUIRED, &mut violations);
        violations
    }
}

/// Everything an acquirer needs to charge a card.
///
/// A transaction is valid only when all four parts are. It is built once per
/// request and either dropped or submitted; it is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub card: Card,
    pub purchase: Purchase,
    pub store: Store,
    pub acquirer: AcquirerSelector,
}

impl Transaction {
    pub fn new(card: Card, purchase: Purchase, store: Store, acquirer: AcquirerSelector) -> Self {
        Self {
            card,
            purchase,
            store,
            acquirer,
        }
    }
}

impl Validate for Transaction {
    fn violations(&self) -> Vec<String> {
        let mut violations = self.card.violations();
        violations.extend(self.purchase.violations());
        violations.extend(self.store.violations());
        violations.extend(self.acquirer.violations());
        violations
    }
}
