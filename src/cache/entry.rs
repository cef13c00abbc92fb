use serde::{Deserialize, Serialize};

use crate::suggestion::Suggestion;

/// One cached keyword. `expire_at` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub keyword: String,
    pub expire_at: i64,
    pub suggestions: Vec<Suggestion>,
}

impl CacheEntry {
    /// An entry is still valid at exactly `expire_at`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expire_at
    }
}
