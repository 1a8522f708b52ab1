//! Expansion sequencer timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and attempt budgets used when revealing a folder in the host tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Interval between checks while waiting for a node, in milliseconds.
    #[serde(default = "default_locate_interval")]
    pub locate_interval_ms: u64,
    /// Checks allowed per chain element.
    #[serde(default = "default_locate_attempts")]
    pub locate_attempts: u32,
    /// Checks allowed when only the target id is known.
    #[serde(default = "default_fallback_attempts")]
    pub fallback_attempts: u32,
    /// Checks allowed while waiting for the tree itself to render.
    #[serde(default = "default_tree_ready_attempts")]
    pub tree_ready_attempts: u32,
    /// Delay after triggering an expand, in milliseconds.
    #[serde(default = "default_expand_settle")]
    pub expand_settle_ms: u64,
    /// Delay between chain steps, in milliseconds.
    #[serde(default = "default_step_delay")]
    pub step_delay_ms: u64,
}

impl NavigationConfig {
    /// Poll interval as a [`Duration`].
    pub fn locate_interval(&self) -> Duration {
        Duration::from_millis(self.locate_interval_ms)
    }

    /// Expand settle delay as a [`Duration`].
    pub fn expand_settle(&self) -> Duration {
        Duration::from_millis(self.expand_settle_ms)
    }

    /// Inter-step delay as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            locate_interval_ms: default_locate_interval(),
            locate_attempts: default_locate_attempts(),
            fallback_attempts: default_fallback_attempts(),
            tree_ready_attempts: default_tree_ready_attempts(),
            expand_settle_ms: default_expand_settle(),
            step_delay_ms: default_step_delay(),
        }
    }
}

fn default_locate_interval() -> u64 {
    500
}

fn default_locate_attempts() -> u32 {
    10
}

fn default_fallback_attempts() -> u32 {
    20
}

fn default_tree_ready_attempts() -> u32 {
    20
}

fn default_expand_settle() -> u64 {
    300
}

fn default_step_delay() -> u64 {
    200
}
