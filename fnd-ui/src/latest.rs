//! Newest-wins storage for the current analysis result
//!
//! Overlapping analyses race on completion order. Each dispatched
//! analysis takes a monotonically increasing sequence number up front;
//! a completion is committed only if nothing newer has committed
//! already, so a slow stale response can never overwrite a fresh one.

use std::sync::atomic::{AtomicU64, Ordering};

use fnd_common::AnalysisResult;
use tokio::sync::RwLock;

/// The analysis whose completion most recently won.
#[derive(Debug, Clone)]
pub struct StoredResult {
    pub seq: u64,
    pub result: AnalysisResult,
}

/// Tracks the current result across overlapping analyses.
#[derive(Debug, Default)]
pub struct ResultStore {
    next_seq: AtomicU64,
    current: RwLock<Option<StoredResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a sequence number for a newly dispatched analysis.
    pub fn begin(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Commit a completed analysis. Returns false when a newer result
    /// had already landed and this one was discarded.
    pub async fn commit(&self, seq: u64, result: AnalysisResult) -> bool {
        let mut slot = self.current.write().await;
        let newest = slot.as_ref().map(|stored| stored.seq).unwrap_or(0);
        if newest > seq {
            tracing::debug!(seq, newest, "Discarding stale analysis result");
            return false;
        }
        *slot = Some(StoredResult { seq, result });
        true
    }

    /// Snapshot of the current result, if any analysis has completed.
    pub async fn snapshot(&self) -> Option<StoredResult> {
        self.current.read().await.clone()
    }

    /// Drop the current result (explicit clear action).
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}
