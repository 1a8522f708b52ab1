//! Host UI surface traits.
//!
//! The engine never touches the host page directly. Adapters implement
//! these traits with whatever lookup the host offers (selectors, ids,
//! accessibility trees). Every query and command must be synchronous and
//! idempotent: asking twice without an intervening render yields the same
//! answer, and triggering an action twice is harmless.

use crate::types::id::{FolderId, TestRunItemId};

/// Rendered state of a single folder node in the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    /// Rendered with an expand control, children hidden.
    Collapsed,
    /// Rendered with its children shown.
    Expanded,
    /// Rendered without any expand control.
    Leaf,
}

impl NodeState {
    /// Returns `true` if no expand action is needed to show children.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanded | Self::Leaf)
    }
}

/// The folder tree widget of the host page.
pub trait TreeSurface: Send + Sync {
    /// Whether any folder node has rendered yet.
    fn tree_ready(&self) -> bool;

    /// Current state of a folder node, or `None` if it is not rendered.
    fn node_state(&self, id: FolderId) -> Option<NodeState>;

    /// Activate the node's expand control. Returns `false` if none was found.
    fn trigger_expand(&self, id: FolderId) -> bool;

    /// Activate the node's selection. Returns `false` if nothing was clickable.
    fn trigger_select(&self, id: FolderId) -> bool;
}

/// A grid of test run item rows that can carry a folder path label.
pub trait RowSurface: Send + Sync {
    /// Ids of the rows currently rendered, in display order.
    fn rendered_rows(&self) -> Vec<TestRunItemId>;

    /// Whether the row already carries a folder path label.
    fn has_path_label(&self, row: TestRunItemId) -> bool;

    /// Attach a folder path label to the row.
    fn attach_path_label(&self, row: TestRunItemId, path: &str);
}

/// The rendered folder list that can carry "copy link" buttons.
pub trait FolderSurface: Send + Sync {
    /// Ids of the folders currently rendered that expose a name wrapper.
    fn rendered_folders(&self) -> Vec<FolderId>;

    /// Whether the folder already carries a link button.
    fn has_link_button(&self, id: FolderId) -> bool;

    /// Attach a link button to the folder.
    fn attach_link_button(&self, id: FolderId);
}
