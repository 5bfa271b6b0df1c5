use super::json_store::{JsonFileStore, StoreError};
use crate::domain::immersion::ImmersionItem;
use std::path::PathBuf;

pub const IMMERSION_FILE: &str = "immersion_feed.json";

pub struct ImmersionRepository {
    store: JsonFileStore<ImmersionItem>,
}

impl ImmersionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub async fn create(&self, item: ImmersionItem) -> Result<(), StoreError> {
        self.store.update(move |items| items.push(item)).await
    }

    /// Newest-first slice of the feed
    pub async fn find_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ImmersionItem>, StoreError> {
        let mut items = self.store.load_all().await?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items.into_iter().skip(offset).take(limit).collect())
    }
}
