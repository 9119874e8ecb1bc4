mod domain_record_client;

pub use domain_record_client::{DomainRecordClient, ListOptions};
