//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use foldernav_client::TreeSource;
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::traits::surface::{FolderSurface, NodeState, RowSurface, TreeSurface};
use foldernav_core::types::id::{FolderId, TestRunId, TestRunItemId};
use foldernav_entity::folder::FolderTree;
use foldernav_entity::test_run::{TestRun, TestRunItem};
use foldernav_service::{FolderNavigator, HostContext};

/// Project id used by every test.
pub const PROJECT_ID: &str = "10000";

/// Delay between a folder opening and its children rendering.
pub const RENDER_DELAY: Duration = Duration::from_millis(700);

/// Folder tree used by most tests.
///
/// ```text
/// Regression (1)
/// ├── Login (2)
/// │   ├── SSO (3)
/// │   └── Password (4)
/// └── Checkout (5)
/// Smoke (10)
/// ```
pub fn sample_tree() -> FolderTree {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "name": "Regression",
            "children": [
                {
                    "id": 2,
                    "name": "Login",
                    "parentId": 1,
                    "children": [
                        { "id": 3, "name": "SSO", "parentId": 2 },
                        { "id": 4, "name": "Password", "parentId": 2 }
                    ]
                },
                { "id": 5, "name": "Checkout", "parentId": 1 }
            ]
        },
        { "id": 10, "name": "Smoke" }
    ]))
    .expect("valid tree fixture")
}

/// Same folders with `SSO` moved under `Checkout` and `Login` deleted.
pub fn reorganized_tree() -> FolderTree {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "name": "Regression",
            "children": [
                {
                    "id": 5,
                    "name": "Checkout",
                    "parentId": 1,
                    "children": [{ "id": 3, "name": "SSO", "parentId": 5 }]
                }
            ]
        },
        { "id": 10, "name": "Smoke" }
    ]))
    .expect("valid tree fixture")
}

/// Backend double serving fixed snapshots.
#[derive(Debug)]
pub struct InMemorySource {
    /// Tree returned by `fetch_tree`.
    pub tree: Mutex<FolderTree>,
    /// Items returned by `fetch_test_run_items`.
    pub items: Vec<TestRunItem>,
    /// Number of tree fetches.
    pub tree_fetches: AtomicUsize,
}

impl InMemorySource {
    /// Create a source over `tree` with no test run items.
    pub fn new(tree: FolderTree) -> Self {
        Self {
            tree: Mutex::new(tree),
            items: Vec::new(),
            tree_fetches: AtomicUsize::new(0),
        }
    }

    /// Attach test run items as `(item id, folder id)` pairs.
    pub fn with_items(mut self, items: &[(u64, Option<u64>)]) -> Self {
        self.items = items
            .iter()
            .map(|(id, folder)| TestRunItem {
                id: TestRunItemId(*id),
                folder_id: folder.map(FolderId),
            })
            .collect();
        self
    }

    /// Replace the tree the next fetch returns.
    pub fn replace_tree(&self, tree: FolderTree) {
        *self.tree.lock().expect("tree lock") = tree;
    }
}

#[async_trait]
impl TreeSource for InMemorySource {
    async fn fetch_tree(&self, project_id: &str) -> AppResult<FolderTree> {
        self.tree_fetches.fetch_add(1, Ordering::SeqCst);
        if project_id != PROJECT_ID {
            return Err(AppError::external(format!("unknown project {project_id}")));
        }
        Ok(self.tree.lock().expect("tree lock").clone())
    }

    async fn fetch_test_run(&self, _project_id: &str, key: &str) -> AppResult<TestRun> {
        Ok(TestRun {
            id: TestRunId(77),
            key: key.to_string(),
            name: "Release regression".to_string(),
        })
    }

    async fn fetch_test_run_items(
        &self,
        _project_id: &str,
        run_id: TestRunId,
    ) -> AppResult<Vec<TestRunItem>> {
        assert_eq!(run_id, TestRunId(77));
        Ok(self.items.clone())
    }
}

/// Host page double.
///
/// Root folders render immediately. Children render [`RENDER_DELAY`] after
/// their parent is expanded, the way the host's lazy tree does.
pub struct HostPage {
    started: Instant,
    parents: HashMap<FolderId, Option<FolderId>>,
    order: Vec<FolderId>,
    with_children: HashSet<FolderId>,
    opened: Mutex<HashMap<FolderId, Instant>>,
    /// Folders whose expand control was clicked, in order.
    pub expand_clicks: Mutex<Vec<FolderId>>,
    /// Folders selected, in order.
    pub selected: Mutex<Vec<FolderId>>,
    /// Folders carrying a link button.
    pub buttons: Mutex<HashSet<FolderId>>,
    /// Rendered grid rows.
    pub rows: Mutex<Vec<TestRunItemId>>,
    /// Path labels attached to rows.
    pub labels: Mutex<HashMap<TestRunItemId, String>>,
}

impl HostPage {
    /// Render `tree` with every folder collapsed.
    pub fn new(tree: &FolderTree) -> Self {
        let mut parents = HashMap::new();
        let mut with_children = HashSet::new();
        for root in &tree.roots {
            parents.insert(root.id, None);
        }
        for node in tree.iter() {
            if !node.children.is_empty() {
                with_children.insert(node.id);
            }
            for child in &node.children {
                parents.insert(child.id, Some(node.id));
            }
        }

        Self {
            started: Instant::now(),
            parents,
            order: tree.iter().map(|node| node.id).collect(),
            with_children,
            opened: Mutex::new(HashMap::new()),
            expand_clicks: Mutex::new(Vec::new()),
            selected: Mutex::new(Vec::new()),
            buttons: Mutex::new(HashSet::new()),
            rows: Mutex::new(Vec::new()),
            labels: Mutex::new(HashMap::new()),
        }
    }

    fn visible(&self, id: FolderId) -> bool {
        match self.parents.get(&id) {
            None => false,
            Some(None) => true,
            Some(Some(parent)) => {
                let opened_at = self.opened.lock().expect("opened lock").get(parent).copied();
                self.visible(*parent)
                    && opened_at.is_some_and(|at| Instant::now() >= at + RENDER_DELAY)
            }
        }
    }

    /// Folders selected so far.
    pub fn selected(&self) -> Vec<FolderId> {
        self.selected.lock().expect("selected lock").clone()
    }

    /// Folders whose expand control was clicked so far.
    pub fn expand_clicks(&self) -> Vec<FolderId> {
        self.expand_clicks.lock().expect("clicks lock").clone()
    }

    /// Render additional grid rows.
    pub fn render_rows(&self, rows: &[u64]) {
        self.rows
            .lock()
            .expect("rows lock")
            .extend(rows.iter().copied().map(TestRunItemId));
    }

    /// Time since the page was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl TreeSurface for HostPage {
    fn tree_ready(&self) -> bool {
        !self.parents.is_empty()
    }

    fn node_state(&self, id: FolderId) -> Option<NodeState> {
        if !self.visible(id) {
            return None;
        }
        Some(if !self.with_children.contains(&id) {
            NodeState::Leaf
        } else if self.opened.lock().expect("opened lock").contains_key(&id) {
            NodeState::Expanded
        } else {
            NodeState::Collapsed
        })
    }

    fn trigger_expand(&self, id: FolderId) -> bool {
        if !self.visible(id) || !self.with_children.contains(&id) {
            return false;
        }
        self.opened
            .lock()
            .expect("opened lock")
            .entry(id)
            .or_insert_with(Instant::now);
        self.expand_clicks.lock().expect("clicks lock").push(id);
        true
    }

    fn trigger_select(&self, id: FolderId) -> bool {
        let visible = self.visible(id);
        if visible {
            self.selected.lock().expect("selected lock").push(id);
        }
        visible
    }
}

impl FolderSurface for HostPage {
    fn rendered_folders(&self) -> Vec<FolderId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.visible(*id))
            .collect()
    }

    fn has_link_button(&self, id: FolderId) -> bool {
        self.buttons.lock().expect("buttons lock").contains(&id)
    }

    fn attach_link_button(&self, id: FolderId) {
        self.buttons.lock().expect("buttons lock").insert(id);
    }
}

impl RowSurface for HostPage {
    fn rendered_rows(&self) -> Vec<TestRunItemId> {
        self.rows.lock().expect("rows lock").clone()
    }

    fn has_path_label(&self, row: TestRunItemId) -> bool {
        self.labels.lock().expect("labels lock").contains_key(&row)
    }

    fn attach_path_label(&self, row: TestRunItemId, path: &str) {
        self.labels
            .lock()
            .expect("labels lock")
            .insert(row, path.to_string());
    }
}

/// Test application context
pub struct TestApp {
    /// Backend double
    pub source: Arc<InMemorySource>,
    /// Navigator under test
    pub navigator: FolderNavigator,
    /// Host page rendering the current tree
    pub page: Arc<HostPage>,
}

impl TestApp {
    /// Create a new test application over `source`, with a page rendering
    /// the source's current tree.
    pub fn new(source: InMemorySource) -> Self {
        let source = Arc::new(source);
        let page = Arc::new(HostPage::new(&source.tree.lock().expect("tree lock")));
        let navigator = FolderNavigator::from_config(source.clone(), &AppConfig::default());
        Self {
            source,
            navigator,
            page,
        }
    }

    /// Host context of the embedded page.
    pub fn host(&self) -> HostContext {
        HostContext::from_query(&format!(
            "projectKey=PRJ&projectId={PROJECT_ID}&xdm_e=https%3A%2F%2Fexample.atlassian.net"
        ))
        .expect("valid query")
    }

    /// Swap the page for one rendering `tree`.
    pub fn rerender(&mut self, tree: &FolderTree) {
        self.page = Arc::new(HostPage::new(tree));
    }
}

/// Fragment part of a URL.
pub fn fragment(url: &str) -> &str {
    url.find('#').map_or("", |at| &url[at..])
}
