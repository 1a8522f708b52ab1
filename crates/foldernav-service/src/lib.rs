//! # foldernav-service
//!
//! Navigation logic for FolderNav. The codec turns ancestor chains into
//! path tokens, the sequencer walks a chain through a lazily rendered host
//! tree, and the annotation passes decorate rendered rows and folders.
//!
//! Services follow constructor injection: the host page is reached only
//! through the surface traits in `foldernav-core`, and backend data only
//! through [`foldernav_client::TreeSource`].

pub mod annotate;
pub mod codec;
pub mod expand;
pub mod link;
pub mod navigator;
pub mod wait;

pub use annotate::{
    AnnotationPass, ChangeWatcher, FolderLinkButtons, FolderPathLabels, UiChangeNotifier,
};
pub use expand::{ExpansionFailure, ExpansionReport, ExpansionSequencer, ExpansionState};
pub use link::{
    HostContext, LinkBuilder, NavigationError, NavigationParams, PageKind, TestCycleInfo,
};
pub use navigator::FolderNavigator;
pub use wait::{WaitPolicy, WaitTimeout, wait_for};
