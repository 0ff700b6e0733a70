//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - the one-time login exchange
//! - [`ListingApi`] - paginated and dictionary listing endpoints
//!
//! Handlers and the sweep engine are written against these traits so the
//! mock client can stand in for the wire during tests.

mod auth;
mod listing;

pub use auth::AuthApi;
pub use listing::ListingApi;
