mod lookup_domain_record;

pub use lookup_domain_record::LookupDomainRecordUseCase;
