pub mod domain_records;

// Re-export use cases
pub use domain_records::LookupDomainRecordUseCase;
