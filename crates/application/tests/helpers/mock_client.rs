#![allow(dead_code)]

use async_trait::async_trait;
use linode_records_application::ports::{DomainRecordClient, ListOptions};
use linode_records_domain::{DomainError, DomainRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

// ── MockDomainRecordClient ────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDomainRecordClient {
    records: Arc<RwLock<HashMap<i64, Vec<DomainRecord>>>>,
    list_override: Arc<RwLock<Option<Vec<DomainRecord>>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    get_calls: Arc<AtomicUsize>,
    list_calls: Arc<AtomicUsize>,
    last_list_options: Arc<RwLock<Option<ListOptions>>>,
}

impl MockDomainRecordClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(domain_id: i64, records: Vec<DomainRecord>) -> Self {
        let client = Self::new();
        client.insert_records(domain_id, records);
        client
    }

    pub fn insert_records(&self, domain_id: i64, records: Vec<DomainRecord>) {
        self.records
            .write()
            .unwrap()
            .entry(domain_id)
            .or_default()
            .extend(records);
    }

    /// Makes every list call return exactly these records, ignoring the filter.
    pub fn set_list_response(&self, records: Vec<DomainRecord>) {
        *self.list_override.write().unwrap() = Some(records);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.write().unwrap() = Some(error);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn remote_calls(&self) -> usize {
        self.get_calls() + self.list_calls()
    }

    pub fn last_list_options(&self) -> Option<ListOptions> {
        self.last_list_options.read().unwrap().clone()
    }

    fn fail_if_set(&self) -> Result<(), DomainError> {
        match self.error.read().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DomainRecordClient for MockDomainRecordClient {
    async fn get_record(
        &self,
        domain_id: i64,
        record_id: i64,
    ) -> Result<DomainRecord, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_set()?;

        self.records
            .read()
            .unwrap()
            .get(&domain_id)
            .and_then(|records| records.iter().find(|r| r.id == record_id).cloned())
            .ok_or_else(|| DomainError::Api {
                status: 404,
                reason: "Not found".to_string(),
            })
    }

    async fn list_records(
        &self,
        domain_id: i64,
        options: &ListOptions,
    ) -> Result<Vec<DomainRecord>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list_options.write().unwrap() = Some(options.clone());
        self.fail_if_set()?;

        if let Some(records) = self.list_override.read().unwrap().clone() {
            return Ok(records);
        }

        let name = options
            .filter
            .as_deref()
            .and_then(|f| serde_json::from_str::<serde_json::Value>(f).ok())
            .and_then(|v| v.get("name").and_then(|n| n.as_str()).map(str::to_string));

        let records = self
            .records
            .read()
            .unwrap()
            .get(&domain_id)
            .cloned()
            .unwrap_or_default();

        Ok(records
            .into_iter()
            .filter(|r| name.as_deref().is_none_or(|n| r.name == n))
            .collect())
    }
}
