use super::CARD_NOT_FOUND;
use crate::domain::card::Card;
use crate::domain::ports::CardFinder;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding cards, keyed by token.
pub const CF_CARDS: &str = "cards";

/// A persistent card store backed by RocksDB.
///
/// Cards are stored as JSON under their token bytes. `Clone` shares the
/// underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBCardStore {
    db: Arc<DB>,
}

impl RocksDBCardStore {
    /// Opens or creates a RocksDB instance at `path`, creating the `cards`
    /// column family when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_cards = ColumnFamilyDescriptor::new(CF_CARDS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_cards])?;

        Ok(Self { db: Arc::new(db) })
    }

    pub async fn store(&self, card: &Card) -> Result<()> {
        let cf = self.cards_cf()?;
        let value = serde_json::to_vec(card).map_err(PaymentError::internal)?;
        self.db.put_cf(&cf, card.token.as_bytes(), value)?;
        Ok(())
    }

    fn cards_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_CARDS).ok_or_else(|| {
            PaymentError::internal(std::io::Error::other("Cards column family not found"))
        })
    }
}

#[async_trait]
impl CardFinder for RocksDBCardStore {
    async fn find(&self, token: &str) -> Result<Card> {
        let cf = self.cards_cf()?;
        let Some(bytes) = self.db.get_pinned_cf(&cf, token.as_bytes())? else {
            return Err(PaymentError::not_found(CARD_NOT_FOUND));
        };
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, "stored card is not valid JSON");
            PaymentError::internal(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBCardStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_CARDS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_card_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBCardStore::open(dir.path()).unwrap();
        let card = Card::new("T1", "Holder", "01/2030", "Brand");

        store.store(&card).await.unwrap();

        assert_eq!(store.find("T1").await.unwrap(), card);
        assert!(matches!(
            store.find("T2").await,
            Err(PaymentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDBCardStore::open(dir.path()).unwrap();
            store
                .store(&Card::new("T1", "Holder", "01/2030", "Brand"))
                .await
                .unwrap();
        }

        let reopened = RocksDBCardStore::open(dir.path()).unwrap();
        assert_eq!(reopened.find("T1").await.unwrap().holder, "Holder");
    }
}
