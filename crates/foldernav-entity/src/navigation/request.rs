//! A single "reveal this folder" request.

use serde::{Deserialize, Serialize};

use foldernav_core::types::id::FolderId;

/// Request to reveal and select a folder in the host tree.
///
/// Created when a navigation link is followed or a "go to folder" action
/// fires. It is consumed by exactly one sequencer run and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    /// The folder to select.
    pub target_id: FolderId,
    /// Root-to-target ancestor chain, when known.
    pub chain: Option<Vec<FolderId>>,
}

impl ExpansionRequest {
    /// A request that only knows the target id.
    pub fn direct(target_id: FolderId) -> Self {
        Self {
            target_id,
            chain: None,
        }
    }

    /// A request with a full ancestor chain. Returns `None` for an empty chain.
    pub fn with_chain(chain: Vec<FolderId>) -> Option<Self> {
        let target_id = *chain.last()?;
        Some(Self {
            target_id,
            chain: Some(chain),
        })
    }

    /// The chain to walk, if one is known and non-empty.
    pub fn chain(&self) -> Option<&[FolderId]> {
        self.chain.as_deref().filter(|chain| !chain.is_empty())
    }
}
