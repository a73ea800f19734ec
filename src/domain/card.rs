use super::validation::{Validate, require};
use serde::{Deserialize, Serialize};

pub const CARD_TOKEN_IS_REQUIRED: &str = "card token is required";
pub const CARD_HOLDER_IS_REQUIRED: &str = "card holder is required";
pub const CARD_EXPIRATION_IS_REQUIRED: &str = "card expiration is required";
pub const CARD_BRAND_IS_REQUIRED: &str = "card brand is required";

/// A stored payment card, looked up by its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub token: String,
    pub holder: String,
    pub expiration: String,
    pub brand: String,
}

impl Card {
    pub fn new(
        token: impl Into<String>,
        holder: impl Into<String>,
        expiration: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            holder: holder.into(),
            expiration: expiration.into(),
            brand: brand.into(),
        }
    }
}

impl Validate for Card {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require(&self.token, CARD_TOKEN_IS_REQUIRED, &mut violations);
        require(&self.holder, CARD_HOLDER_IS_REQUIRED, &mut violations);
        require(&self.expiration, CARD_EXPIRATION_IS_REQUIRED, &mut violations);
        require(&self.brand, CARD_BRAND_IS_REQUIRED, &mut violations);
        violations
    }
}
