use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::database::models::{StoreDocument, SubscriptionRecord};
use crate::error::StoreError;
use crate::utils::logging::{log_store_error, log_store_operation};

/// File-backed list of subscriptions.
///
/// The whole collection lives in memory and every write rewrites the whole
/// JSON document. The mutex is held for the duration of a rewrite so two
/// appends can never persist from stale snapshots.
pub struct SubscriptionStore {
    path: PathBuf,
    records: Mutex<Vec<SubscriptionRecord>>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    subscriptions: &'a [SubscriptionRecord],
}

impl SubscriptionStore {
    /// Opens the store at `path` and loads it into memory.
    ///
    /// A missing file is created with an empty collection. A file that cannot
    /// be read or parsed is logged and the store starts empty; it will be
    /// overwritten by the next successful append.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            records: Mutex::new(Vec::new()),
        };

        if !tokio::fs::try_exists(&store.path).await.unwrap_or(false) {
            info!("Creating subscription store {}", store.path.display());
            store.flush().await?;
            return Ok(store);
        }

        match store.load().await {
            Ok(records) => {
                info!(
                    "Loaded {} subscriptions from {}",
                    records.len(),
                    store.path.display()
                );
                *store.records.lock().await = records;
            }
            Err(e) => {
                log_store_error("load", &e.to_string());
                warn!("Starting with an empty subscription list");
            }
        }

        Ok(store)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full persisted collection without touching memory.
    pub async fn load(&self) -> Result<Vec<SubscriptionRecord>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: StoreDocument =
            serde_json::from_str(&raw).map_err(|e| self.unavailable(e))?;
        Ok(document.subscriptions)
    }

    /// Adds one record and rewrites the document before returning.
    ///
    /// On failure the record stays in memory, so memory is ahead of disk until
    /// the next successful write.
    pub async fn append(&self, record: SubscriptionRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.push(record);

        if let Err(e) = self.write_all(&records).await {
            log_store_error("append", &e.to_string());
            return Err(e);
        }

        log_store_operation("append", Some(&format!("{} subscriptions total", records.len())));
        Ok(())
    }

    /// Current in-memory collection in insertion order.
    pub async fn list_all(&self) -> Vec<SubscriptionRecord> {
        self.records.lock().await.clone()
    }

    /// Subscriptions owned by one chat.
    pub async fn list_for_user(&self, user_id: i64) -> Vec<SubscriptionRecord> {
        self.records
            .lock()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Number of subscriptions held in memory.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// True when there are no subscriptions.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Re-reads the file and replaces the in-memory collection with it.
    ///
    /// Picks up edits made by other processes. On error memory is left as it
    /// was.
    pub async fn refresh(&self) -> Result<Vec<SubscriptionRecord>, StoreError> {
        let mut records = self.records.lock().await;
        let loaded = self.load().await?;
        log_store_operation("refresh", Some(&format!("{} subscriptions", loaded.len())));
        *records = loaded;
        Ok(records.clone())
    }

    /// Writes the in-memory collection to disk.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let records = self.records.lock().await;
        self.write_all(&records).await?;
        log_store_operation("flush", Some(&format!("{} subscriptions", records.len())));
        Ok(())
    }

    async fn write_all(&self, records: &[SubscriptionRecord]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(&DocumentRef { subscriptions: records })
            .map_err(|e| self.persistence(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.persistence(e))?;
        }

        // Write next to the target and rename over it so readers never see a
        // half-written document.
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| self.persistence(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.persistence(e))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }

    fn persistence(&self, e: impl std::fmt::Display) -> StoreError {
        StoreError::Persistence {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}
