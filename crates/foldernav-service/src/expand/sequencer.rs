//! Expansion sequencer: walks an ancestor chain through the host tree.

use tracing::{debug, info, warn};

use foldernav_core::config::navigation::NavigationConfig;
use foldernav_core::traits::surface::{NodeState, TreeSurface};
use foldernav_core::types::id::FolderId;
use foldernav_entity::navigation::ExpansionRequest;

use super::state::{ExpansionFailure, ExpansionReport, ExpansionState};
use crate::wait::{WaitPolicy, wait_for};

/// Reveals and selects a folder in a lazily rendered tree.
///
/// The host only renders a level once its parent is expanded, so the chain
/// is walked strictly in order: locate, expand, settle, advance. A missing
/// element aborts the run; nothing is skipped or repaired.
#[derive(Debug, Clone)]
pub struct ExpansionSequencer {
    /// Timing and attempt budgets.
    config: NavigationConfig,
}

impl ExpansionSequencer {
    /// Create a new sequencer.
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// The timing configuration in use.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Run one request to completion and report every state visited.
    ///
    /// With a chain, each element is located and opened in turn and the last
    /// one is selected. Without one, the target is located directly with the
    /// larger fallback budget. The report always ends in `Done` or `Failed`.
    pub async fn run<S>(&self, surface: &S, request: ExpansionRequest) -> ExpansionReport
    where
        S: TreeSurface + ?Sized,
    {
        let mut report = ExpansionReport::new(request.target_id);
        info!(
            target_id = %request.target_id,
            chain_len = request.chain().map_or(0, <[FolderId]>::len),
            "Starting folder expansion"
        );

        match self.drive(surface, &request, &mut report).await {
            Ok(()) => {
                self.enter(&mut report, ExpansionState::Done);
                info!(target_id = %request.target_id, "Folder expansion finished");
            }
            Err(reason) => {
                self.enter(&mut report, ExpansionState::Failed(reason));
                warn!(target_id = %request.target_id, %reason, "Folder expansion aborted");
            }
        }

        report
    }

    async fn drive<S>(
        &self,
        surface: &S,
        request: &ExpansionRequest,
        report: &mut ExpansionReport,
    ) -> Result<(), ExpansionFailure>
    where
        S: TreeSurface + ?Sized,
    {
        self.enter(report, ExpansionState::WaitingForTree);
        wait_for(WaitPolicy::tree_ready(&self.config), || {
            surface.tree_ready().then_some(())
        })
        .await
        .map_err(|_| ExpansionFailure::TreeNotLoaded)?;

        match request.chain() {
            Some(chain) => self.walk_chain(surface, chain, report).await,
            None => {
                debug!(target_id = %request.target_id, "No ancestor chain, locating target directly");
                let policy = WaitPolicy::fallback(&self.config);
                self.locate(surface, request.target_id, 0, policy, report)
                    .await?;
                self.select(surface, request.target_id, 0, report);
                Ok(())
            }
        }
    }

    async fn walk_chain<S>(
        &self,
        surface: &S,
        chain: &[FolderId],
        report: &mut ExpansionReport,
    ) -> Result<(), ExpansionFailure>
    where
        S: TreeSurface + ?Sized,
    {
        let last = chain.len().saturating_sub(1);
        let policy = WaitPolicy::locate(&self.config);

        for (index, &folder_id) in chain.iter().enumerate() {
            let state = self.locate(surface, folder_id, index, policy, report).await?;

            if index == last {
                self.select(surface, folder_id, index, report);
                break;
            }

            self.expand(surface, folder_id, index, state, report).await;
            tokio::time::sleep(self.config.step_delay()).await;
            self.enter(report, ExpansionState::Advancing(index + 1));
        }

        Ok(())
    }

    async fn locate<S>(
        &self,
        surface: &S,
        folder_id: FolderId,
        index: usize,
        policy: WaitPolicy,
        report: &mut ExpansionReport,
    ) -> Result<NodeState, ExpansionFailure>
    where
        S: TreeSurface + ?Sized,
    {
        self.enter(report, ExpansionState::Locating(index));
        wait_for(policy, || surface.node_state(folder_id))
            .await
            .map_err(|timeout| {
                debug!(%folder_id, index, attempts = timeout.attempts, "Folder never rendered");
                ExpansionFailure::NotFound {
                    folder_id,
                    at_index: index,
                }
            })
    }

    async fn expand<S>(
        &self,
        surface: &S,
        folder_id: FolderId,
        index: usize,
        state: NodeState,
        report: &mut ExpansionReport,
    ) where
        S: TreeSurface + ?Sized,
    {
        self.enter(report, ExpansionState::Expanding(index));

        if state.is_open() {
            debug!(%folder_id, ?state, "Folder already open");
            return;
        }

        if surface.trigger_expand(folder_id) {
            tokio::time::sleep(self.config.expand_settle()).await;
        } else {
            // No expand control: the host renders it as a leaf.
            debug!(%folder_id, "No expand control, treating as leaf");
        }
    }

    fn select<S>(&self, surface: &S, folder_id: FolderId, index: usize, report: &mut ExpansionReport)
    where
        S: TreeSurface + ?Sized,
    {
        self.enter(report, ExpansionState::Selecting(index));
        let clicked = surface.trigger_select(folder_id);
        debug!(%folder_id, clicked, "Triggered folder selection");
    }

    fn enter(&self, report: &mut ExpansionReport, state: ExpansionState) {
        debug!(target_id = %report.target_id, %state, "Expansion state");
        report.push(state);
    }
}
