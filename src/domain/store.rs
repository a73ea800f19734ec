use super::validation::{Validate, require};
use serde::{Deserialize, Serialize};

pub const STORE_IDENTIFICATION_IS_REQUIRED: &str = "store identification is required";
pub const STORE_ADDRESS_IS_REQUIRED: &str = "store address is required";
pub const STORE_CEP_IS_REQUIRED: &str = "store cep is required";

/// The merchant submitting the purchase. `cep` is its postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub identification: String,
    pub address: String,
    pub cep: String,
}

impl Store {
    pub fn new(
        identification: impl Into<String>,
        address: impl Into<String>,
        cep: impl Into<String>,
    ) -> Self {
        Self {
            identification: identification.into(),
            address: address.into(),
            cep: cep.into(),
        }
    }
}

impl Validate for Store {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(
            &self.identification,
            STORE_IDENTIFICATION_IS_REQUIRED,
            &mut violations,
        );
        require(&self.address, STORE_ADDRESS_IS_REQUIRED, &mut violations);
        require(&self.cep, STORE_CEP_IS_REQUIRED, &mut violations);
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_store() {
        assert!(Store::new("S1", "A1", "C1").validate().is_ok());
    }

    #[test]
    fn test_missing_address_and_cep() {
        let store = Store::new("S1", "", "");
        assert_eq!(
            store.violations(),
            [STORE_ADDRESS_IS_REQUIRED, STORE_CEP_IS_REQUIRED]
        );
    }
}
