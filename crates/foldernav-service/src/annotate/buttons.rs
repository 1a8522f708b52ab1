//! "Copy link" buttons on rendered folders.

use std::sync::Arc;

use tracing::debug;

use foldernav_core::traits::surface::FolderSurface;

use super::AnnotationPass;

/// Adds a link button to every rendered folder that lacks one.
pub struct FolderLinkButtons {
    surface: Arc<dyn FolderSurface>,
}

impl FolderLinkButtons {
    /// Create a new button pass.
    pub fn new(surface: Arc<dyn FolderSurface>) -> Self {
        Self { surface }
    }
}

impl AnnotationPass for FolderLinkButtons {
    fn name(&self) -> &'static str {
        "folder_link_buttons"
    }

    fn run(&self) -> usize {
        let added = self
            .surface
            .rendered_folders()
            .into_iter()
            .filter(|id| !self.surface.has_link_button(*id))
            .inspect(|id| self.surface.attach_link_button(*id))
            .count();

        if added > 0 {
            debug!(added, "Added folder link buttons");
        }
        added
    }
}
