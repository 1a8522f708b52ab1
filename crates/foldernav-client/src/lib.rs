//! # foldernav-client
//!
//! Access to the test-management backend. The [`TreeSource`] trait is the
//! boundary the engine depends on; [`HttpTreeSource`] implements it against
//! the REST API with the host page's JWT.

pub mod auth;
pub mod http;
pub mod source;

pub use auth::{Credentials, jwt_from_cookie_header};
pub use http::HttpTreeSource;
pub use source::TreeSource;
