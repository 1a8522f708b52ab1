//! Expansion states, failures, and the per-run report.

use std::fmt;

use thiserror::Error;

use foldernav_core::error::{AppError, ErrorKind};
use foldernav_core::types::id::FolderId;

/// Why a sequencer run stopped before selecting the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpansionFailure {
    /// A chain element never rendered within its wait budget.
    #[error("folder {folder_id} not found at chain index {at_index}")]
    NotFound {
        /// The folder that never appeared.
        folder_id: FolderId,
        /// Its position in the chain.
        at_index: usize,
    },
    /// The host tree never rendered at all.
    #[error("folder tree did not load")]
    TreeNotLoaded,
}

impl From<ExpansionFailure> for AppError {
    fn from(err: ExpansionFailure) -> Self {
        let kind = match err {
            ExpansionFailure::NotFound { .. } => ErrorKind::NotFound,
            ExpansionFailure::TreeNotLoaded => ErrorKind::Timeout,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

/// A step of the expansion state machine.
///
/// The index carried by the step variants is the position in the chain
/// being walked (always 0 in fallback mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionState {
    /// Nothing has happened yet.
    Idle,
    /// Waiting for the host tree to render.
    WaitingForTree,
    /// Waiting for the node at this index to render.
    Locating(usize),
    /// Opening the node at this index.
    Expanding(usize),
    /// Moving on to the node at this index.
    Advancing(usize),
    /// Selecting the node at this index.
    Selecting(usize),
    /// The target was selected.
    Done,
    /// The run stopped.
    Failed(ExpansionFailure),
}

impl ExpansionState {
    /// Whether no further transition can follow.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

impl fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::WaitingForTree => write!(f, "waiting_for_tree"),
            Self::Locating(i) => write!(f, "locating({i})"),
            Self::Expanding(i) => write!(f, "expanding({i})"),
            Self::Advancing(i) => write!(f, "advancing({i})"),
            Self::Selecting(i) => write!(f, "selecting({i})"),
            Self::Done => write!(f, "done"),
            Self::Failed(reason) => write!(f, "failed({reason})"),
        }
    }
}

/// Ordered record of every state one run visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionReport {
    /// The folder the run was asked to select.
    pub target_id: FolderId,
    /// Visited states, starting with [`ExpansionState::Idle`].
    pub states: Vec<ExpansionState>,
}

impl ExpansionReport {
    pub(crate) fn new(target_id: FolderId) -> Self {
        Self {
            target_id,
            states: vec![ExpansionState::Idle],
        }
    }

    pub(crate) fn push(&mut self, state: ExpansionState) {
        self.states.push(state);
    }

    /// The last recorded state.
    pub fn outcome(&self) -> ExpansionState {
        self.states.last().copied().unwrap_or(ExpansionState::Idle)
    }

    /// Whether the run reached [`ExpansionState::Done`].
    pub fn is_done(&self) -> bool {
        self.outcome() == ExpansionState::Done
    }

    /// Whether the run visited the given state.
    pub fn visited(&self, state: ExpansionState) -> bool {
        self.states.contains(&state)
    }

    /// `Ok` when the target was selected, otherwise the failure reason.
    pub fn into_result(self) -> Result<FolderId, ExpansionFailure> {
        match self.outcome() {
            ExpansionState::Failed(reason) => Err(reason),
            _ => Ok(self.target_id),
        }
    }
}
