use super::validation::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PURCHASE_VALUE_IS_INVALID: &str = "purchase value is invalid";
pub const PURCHASE_ITEMS_IS_REQUIRED: &str = "purchase items is required";
pub const PURCHASE_ITEMS_IS_INVALID: &str = "purchase items is invalid";
pub const PURCHASE_INSTALLMENTS_IS_INVALID: &str = "purchase installments is invalid";

/// What is being paid for: a positive value split into `installments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub value: Decimal,
    pub items: Vec<String>,
    pub installments: i32,
}

impl Purchase {
    pub fn new(value: Decimal, items: Vec<String>, installments: i32) -> Self {
        Self {
            value,
            items,
            installments,
        }
    }
}

impl Validate for Purchase {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.value <= Decimal::ZERO {
            violations.push(PURCHASE_VALUE_IS_INVALID.to_string());
        }

        // One empty item invalidates the whole list; it is reported once.
        if self.items.is_empty() {
            violations.push(PURCHASE_ITEMS_IS_REQUIRED.to_string());
        } else if self.items.iter().any(String::is_empty) {
            violations.push(PURCHASE_ITEMS_IS_INVALID.to_string());
        }

        if self.installments <= 0 {
            violations.push(PURCHASE_INSTALLMENTS_IS_INVALID.to_string());
        }

        violations
    }
}
