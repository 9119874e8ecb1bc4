use linode_records_domain::{
    DomainError, DomainRecord, DomainRecordResult, RecordLookupInput, RecordQuery, RecordSelector,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{DomainRecordClient, ListOptions};

/// Resolves one record of a domain by ID or by name.
///
/// By name, the first record of the first page wins when several share the
/// name; no further ordering is applied on top of the service's own.
pub struct LookupDomainRecordUseCase {
    client: Arc<dyn DomainRecordClient>,
}

impl LookupDomainRecordUseCase {
    pub fn new(client: Arc<dyn DomainRecordClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(domain_id = %input.domain_id))]
    pub async fn execute(
        &self,
        input: &RecordLookupInput,
    ) -> Result<DomainRecordResult, DomainError> {
        let query = RecordQuery::parse(input)?;

        let record = match &query.selector {
            RecordSelector::ById(record_id) => {
                Some(self.fetch(query.domain_id, *record_id).await?)
            }
            RecordSelector::ByName(name) => self.find_by_name(query.domain_id, name).await?,
        };

        match record {
            Some(record) => {
                info!(
                    domain_id = query.domain_id,
                    record_id = record.id,
                    record_type = %record.record_type,
                    "Domain record resolved"
                );
                Ok(DomainRecordResult::from(record))
            }
            None => {
                warn!(
                    domain_id = query.domain_id,
                    term = %query.search_term(),
                    "Domain record not found"
                );
                Err(DomainError::RecordNotFound {
                    name: input.name.clone(),
                    domain_id: query.domain_id,
                })
            }
        }
    }

    async fn fetch(&self, domain_id: i64, record_id: i64) -> Result<DomainRecord, DomainError> {
        self.client
            .get_record(domain_id, record_id)
            .await
            .map_err(|e| DomainError::RecordFetchFailed(Box::new(e)))
    }

    async fn find_by_name(
        &self,
        domain_id: i64,
        name: &str,
    ) -> Result<Option<DomainRecord>, DomainError> {
        let options = ListOptions::name_filter(name);
        let records = self
            .client
            .list_records(domain_id, &options)
            .await
            .map_err(|e| DomainError::RecordListFailed(Box::new(e)))?;

        if records.len() > 1 {
            debug!(
                domain_id,
                name,
                matches = records.len(),
                "Several records share the name, taking the first"
            );
        }

        Ok(records.into_iter().next())
    }
}
