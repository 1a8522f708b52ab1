//! Test run entities used by the folder path annotation pass.

pub mod model;

pub use model::{TestRun, TestRunItem};
