//! Per-unit serialization of check-then-insert sequences

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per unit id.
///
/// Hold creation and booking creation take the unit's lock before the
/// availability check and release it after the insert, so two requests for
/// the same unit can never both pass the check.
#[derive(Debug, Default, Clone)]
pub struct UnitLocks {
    inner: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl UnitLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, unit_id: &str) -> OwnedMutexGuard<()> {
        let mutex = self
            .inner
            .entry(unit_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Units that have been locked at least once
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
