use super::CARD_NOT_FOUND;
use crate::domain::card::Card;
use crate::domain::ports::CardFinder;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A thread-safe in-memory card store keyed by token.
///
/// `Clone` shares the underlying map, so a seeded store can be handed to the
/// use case while the caller keeps a handle to it.
#[derive(Default, Clone)]
pub struct InMemoryCardStore {
    cards: Arc<RwLock<HashMap<String, Card>>>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a card.
    pub async fn insert(&self, card: Card) {
        let mut cards = self.cards.write().await;
        cards.insert(card.token.clone(), card);
    }

    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cards.read().await.is_empty()
    }
}

#[async_trait]
impl CardFinder for InMemoryCardStore {
    async fn find(&self, token: &str) -> Result<Card> {
        let cards = self.cards.read().await;
        cards.get(token).cloned().ok_or_else(|| {
            debug!("card lookup missed");
            PaymentError::not_found(CARD_NOT_FOUND)
        })
    }
}
