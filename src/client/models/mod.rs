//! AlfaCRM API data models
//!
//! Domain types for the subset of the AlfaCRM wire protocol the probe relies
//! on. All of these are ephemeral: they live for one command invocation.

mod auth;
mod customer;
mod lookup;

pub use auth::SessionToken;
pub use customer::{CustomerFilter, CustomerPage, Lead};
pub use lookup::{LeadStatus, RejectReason};
