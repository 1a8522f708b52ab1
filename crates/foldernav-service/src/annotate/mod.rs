//! Idempotent page annotation passes.
//!
//! The host re-renders freely, so every pass checks for its own marker
//! before touching an element and can be re-run on each change
//! notification without duplicating anything.

pub mod buttons;
pub mod labels;
pub mod watcher;

pub use buttons::FolderLinkButtons;
pub use labels::FolderPathLabels;
pub use watcher::{ChangeWatcher, UiChangeNotifier};

/// A single idempotent decoration pass over the rendered page.
pub trait AnnotationPass: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Annotate everything not yet annotated and return how many items
    /// were newly annotated.
    fn run(&self) -> usize;
}
