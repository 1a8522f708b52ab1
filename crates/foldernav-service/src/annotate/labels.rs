//! Folder path labels on test run item rows.

use std::sync::Arc;

use tracing::debug;

use foldernav_cache::ItemFolderMap;
use foldernav_core::traits::surface::RowSurface;
use foldernav_entity::folder::PathIndex;

use super::AnnotationPass;

/// Label text shown next to a row's name.
pub fn format_label(path: &str) -> String {
    format!("({path})")
}

/// Appends each row's folder path to its name cell.
pub struct FolderPathLabels {
    surface: Arc<dyn RowSurface>,
    index: Arc<PathIndex>,
    items: Arc<ItemFolderMap>,
}

impl FolderPathLabels {
    /// Create a new label pass over one path snapshot and item map.
    pub fn new(surface: Arc<dyn RowSurface>, index: Arc<PathIndex>, items: Arc<ItemFolderMap>) -> Self {
        Self {
            surface,
            index,
            items,
        }
    }
}

impl std::fmt::Debug for FolderPathLabels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderPathLabels")
            .field("folders", &self.index.len())
            .field("items", &self.items.len())
            .finish()
    }
}

impl AnnotationPass for FolderPathLabels {
    fn name(&self) -> &'static str {
        "folder_path_labels"
    }

    fn run(&self) -> usize {
        let rows = self.surface.rendered_rows();
        let mut labeled = 0;

        for row in &rows {
            if self.surface.has_path_label(*row) {
                continue;
            }
            let Some(path) = self
                .items
                .get(row)
                .and_then(|folder_id| self.index.path_of(*folder_id))
            else {
                continue;
            };
            self.surface.attach_path_label(*row, &format_label(path));
            labeled += 1;
        }

        debug!(rows = rows.len(), labeled, "Processed grid rows");
        labeled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use foldernav_core::types::id::{FolderId, TestRunItemId};
    use foldernav_entity::folder::{FolderNode, FolderTree};

    #[derive(Default)]
    struct FakeGrid {
        rows: Mutex<Vec<TestRunItemId>>,
        labels: Mutex<HashMap<TestRunItemId, String>>,
    }

    impl RowSurface for FakeGrid {
        fn rendered_rows(&self) -> Vec<TestRunItemId> {
            self.rows.lock().unwrap().clone()
        }

        fn has_path_label(&self, row: TestRunItemId) -> bool {
            self.labels.lock().unwrap().contains_key(&row)
        }

        fn attach_path_label(&self, row: TestRunItemId, path: &str) {
            self.labels.lock().unwrap().insert(row, path.to_string());
        }
    }

    fn make_pass(grid: Arc<FakeGrid>) -> FolderPathLabels {
        let tree = FolderTree::new(vec![
            FolderNode::new(1, "Suite").with_child(FolderNode::new(2, "Login")),
        ]);
        let items: ItemFolderMap = [
            (TestRunItemId(100), FolderId(2)),
            (TestRunItemId(101), FolderId(1)),
            (TestRunItemId(102), FolderId(99)),
        ]
        .into_iter()
        .collect();
        FolderPathLabels::new(grid, Arc::new(PathIndex::build(tree)), Arc::new(items))
    }

    #[test]
    fn test_labels_rows_once() {
        let grid = Arc::new(FakeGrid::default());
        grid.rows
            .lock()
            .unwrap()
            .extend([TestRunItemId(100), TestRunItemId(101)]);
        let pass = make_pass(Arc::clone(&grid));

        assert_eq!(pass.run(), 2);
        assert_eq!(pass.run(), 0);

        let labels = grid.labels.lock().unwrap();
        assert_eq!(labels[&TestRunItemId(100)], "(Suite/Login)");
        assert_eq!(labels[&TestRunItemId(101)], "(Suite)");
    }

    #[test]
    fn test_skips_unknown_items_and_folders() {
        let grid = Arc::new(FakeGrid::default());
        grid.rows
            .lock()
            .unwrap()
            .extend([TestRunItemId(102), TestRunItemId(555)]);
        let pass = make_pass(Arc::clone(&grid));

        assert_eq!(pass.run(), 0);
        assert!(grid.labels.lock().unwrap().is_empty());
    }

    #[test]
    fn test_new_rows_are_picked_up() {
        let grid = Arc::new(FakeGrid::default());
        grid.rows.lock().unwrap().push(TestRunItemId(100));
        let pass = make_pass(Arc::clone(&grid));
        assert_eq!(pass.run(), 1);

        grid.rows.lock().unwrap().push(TestRunItemId(101));
        assert_eq!(pass.run(), 1);
    }
}
