use async_trait::async_trait;
use linode_records_domain::{DomainError, DomainRecord};

/// Paging and filtering for a list call.
///
/// `filter` is the JSON filter document sent to the remote service as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub filter: Option<String>,
}

impl ListOptions {
    pub fn new(page: u32, filter: Option<String>) -> Self {
        Self { page, filter }
    }

    /// First page of records whose name matches `name` exactly.
    pub fn name_filter(name: &str) -> Self {
        let filter = serde_json::json!({ "name": name }).to_string();
        Self::new(1, Some(filter))
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new(1, None)
    }
}

#[async_trait]
pub trait DomainRecordClient: Send + Sync {
    async fn get_record(&self, domain_id: i64, record_id: i64)
        -> Result<DomainRecord, DomainError>;

    /// Returns a single page of records, in the service's default order.
    async fn list_records(
        &self,
        domain_id: i64,
        options: &ListOptions,
    ) -> Result<Vec<DomainRecord>, DomainError>;
}
