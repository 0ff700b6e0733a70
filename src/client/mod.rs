//! AlfaCRM API client

pub mod alfacrm;
pub mod api;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use alfacrm::{AlfaCrmClient, BULK_TIMEOUT, DEFAULT_TIMEOUT, TOKEN_HEADER};
pub use api::{AuthApi, ListingApi};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockAlfaCrmClient;
pub use models::{CustomerFilter, CustomerPage, Lead, LeadStatus, RejectReason, SessionToken};
