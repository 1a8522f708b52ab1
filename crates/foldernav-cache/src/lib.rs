//! # foldernav-cache
//!
//! In-process cache of derived folder data, built on
//! [moka](https://crates.io/crates/moka).
//!
//! Every entry is an immutable `Arc` snapshot. A refresh builds a complete
//! new snapshot and replaces the entry in one insert, so readers holding the
//! previous `Arc` keep a consistent view until they drop it.

pub mod keys;
pub mod snapshot;

pub use snapshot::{ItemFolderMap, SnapshotCache};
