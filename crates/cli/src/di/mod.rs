use linode_records_application::use_cases::LookupDomainRecordUseCase;
use linode_records_domain::Config;
use linode_records_infrastructure::linode::LinodeDomainRecordClient;
use std::sync::Arc;

pub struct UseCases {
    pub lookup_record: Arc<LookupDomainRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(LinodeDomainRecordClient::new(&config.api)?);

        Ok(Self {
            lookup_record: Arc::new(LookupDomainRecordUseCase::new(client)),
        })
    }
}
