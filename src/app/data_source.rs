//! The Data Source Adapter.
//!
//! This module sits between the HTTP handlers and the remote spreadsheet:
//! 1.  Every lookup triggers one best-effort fetch of the full row set.
//! 2.  On failure the last successfully fetched snapshot is served instead;
//!     the error never reaches the page.
//! 3.  The cached snapshot is swapped at the reference level, so concurrent
//!     readers see either the old or the new row set, never a partial one.

use crate::domain::record::{Record, Snapshot};
use crate::infra::sheets::SheetsClient;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Anything that can produce the full row set of the backing table.
///
/// The production implementation is [`SheetsClient`]; tests substitute a
/// scripted source. Failures are explicit — the fallback decision belongs to
/// the adapter, not the source.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self) -> anyhow::Result<Vec<Record>>;
}

#[async_trait]
impl RowSource for SheetsClient {
    async fn fetch_rows(&self) -> anyhow::Result<Vec<Record>> {
        SheetsClient::fetch_rows(self).await
    }
}

/// Owns the snapshot cache for one service instance. No module-level state;
/// the instance is injected through the HTTP `AppState`.
pub struct DataSource {
    source: Arc<dyn RowSource>,
    cache: RwLock<Arc<Snapshot>>,
}

impl DataSource {
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(Arc::new(Snapshot::empty())),
        }
    }

    /// One best-effort fetch, no retry. On success the cache is replaced
    /// before returning; on failure the previous snapshot is returned
    /// unchanged (empty if no fetch ever succeeded) and the error is logged.
    pub async fn fetch(&self) -> Arc<Snapshot> {
        match self.source.fetch_rows().await {
            Ok(rows) => {
                let snapshot = Arc::new(Snapshot::new(rows));
                *self.cache.write().await = snapshot.clone();
                snapshot
            }
            Err(e) => {
                eprintln!("Sheet fetch failed, serving cached snapshot: {e:#}");
                self.cache.read().await.clone()
            }
        }
    }

    /// The current snapshot without a fetch attempt (health reporting).
    pub async fn cached(&self) -> Arc<Snapshot> {
        self.cache.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    /// Scripted source: pops one pre-programmed outcome per fetch.
    struct ScriptedSource {
        outcomes: Mutex<Vec<anyhow::Result<Vec<Record>>>>,
    }

    impl ScriptedSource {
        fn new(outcomes: Vec<anyhow::Result<Vec<Record>>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes),
            })
        }
    }

    #[async_trait]
    impl RowSource for ScriptedSource {
        async fn fetch_rows(&self) -> anyhow::Result<Vec<Record>> {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                return Err(anyhow!("script exhausted"));
            }
            outcomes.remove(0)
        }
    }

    fn one_row() -> Vec<Record> {
        vec![Record::from_pairs(vec![(
            "codigo_unico".into(),
            "CC1".into(),
        )])]
    }

    #[tokio::test]
    async fn failure_before_any_success_yields_empty_snapshot() {
        let ds = DataSource::new(ScriptedSource::new(vec![Err(anyhow!("boom"))]));
        let snap = ds.fetch().await;
        assert!(snap.rows.is_empty());
        assert!(snap.fetched_at.is_none());
    }

    #[tokio::test]
    async fn success_replaces_the_cache() {
        let ds = DataSource::new(ScriptedSource::new(vec![Ok(one_row())]));
        let snap = ds.fetch().await;
        assert_eq!(snap.rows.len(), 1);
        assert!(snap.fetched_at.is_some());
        assert_eq!(ds.cached().await.rows.len(), 1);
    }

    #[tokio::test]
    async fn failure_after_success_serves_previous_snapshot_unchanged() {
        let ds = DataSource::new(ScriptedSource::new(vec![
            Ok(one_row()),
            Err(anyhow!("network down")),
        ]));
        let first = ds.fetch().await;
        let second = ds.fetch().await;
        assert_eq!(second.rows, first.rows);
        assert_eq!(second.fetched_at, first.fetched_at);
    }
}
