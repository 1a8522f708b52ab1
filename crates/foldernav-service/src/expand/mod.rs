//! Folder expansion: the state machine that reveals a folder in the host tree.

pub mod sequencer;
pub mod state;

pub use sequencer::ExpansionSequencer;
pub use state::{ExpansionFailure, ExpansionReport, ExpansionState};
