//! Path index snapshot cache configuration.

use serde::{Deserialize, Serialize};

/// In-memory snapshot cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of project snapshots kept at once.
    #[serde(default = "default_max_snapshots")]
    pub max_snapshots: u64,
    /// TTL for a snapshot in seconds before it must be fetched again.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_snapshots: default_max_snapshots(),
            time_to_live_seconds: default_ttl(),
        }
    }
}

fn default_max_snapshots() -> u64 {
    16
}

fn default_ttl() -> u64 {
    600
}
