//! Navigation request models.

pub mod request;

pub use request::ExpansionRequest;
