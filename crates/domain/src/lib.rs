//! Linode Records Domain Layer
pub mod config;
pub mod domain_record;
pub mod errors;
pub mod record_query;
pub mod record_result;
pub mod schema;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_record::{DomainRecord, RecordType};
pub use errors::DomainError;
pub use record_query::{RecordLookupInput, RecordQuery, RecordSelector};
pub use record_result::DomainRecordResult;
pub use schema::{domain_record_schema, field_schema, FieldKind, FieldRole, FieldSchema};
