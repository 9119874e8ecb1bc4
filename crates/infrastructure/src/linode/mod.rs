//! Linode API v4 adapter for domain records.

mod client;
mod models;

pub use client::LinodeDomainRecordClient;
pub use models::{ApiErrorEntry, ApiErrors, RecordsPage};
