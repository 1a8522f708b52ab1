//! Navigation links into the host application.
//!
//! A shared folder link carries the target id and, when known, the path
//! token of its ancestor chain in the URL fragment. [`LinkBuilder`] writes
//! such links and [`NavigationParams`] reads them back.

pub mod builder;
pub mod error;
pub mod page;
pub mod params;

pub use builder::{HostContext, LinkBuilder};
pub use error::NavigationError;
pub use page::{PageKind, TestCycleInfo};
pub use params::NavigationParams;
