use crate::domain_record::DomainRecord;
use serde::{Deserialize, Serialize};

/// Flat projection of a resolved record, keyed the way the schema names fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecordResult {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl_sec: i64,
    pub target: String,
    pub priority: i64,
    pub weight: i64,
    pub port: i64,
    pub protocol: String,
    pub service: String,
    pub tag: String,
}

impl DomainRecordResult {
    /// The reference key a caller tracks the lookup under.
    pub fn identity(&self) -> String {
        self.id.to_string()
    }

    /// Field/value pairs in schema order, values rendered as text.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("type", self.record_type.clone()),
            ("ttl_sec", self.ttl_sec.to_string()),
            ("target", self.target.clone()),
            ("priority", self.priority.to_string()),
            ("weight", self.weight.to_string()),
            ("port", self.port.to_string()),
            ("protocol", self.protocol.clone()),
            ("service", self.service.clone()),
            ("tag", self.tag.clone()),
        ]
    }
}

impl From<&DomainRecord> for DomainRecordResult {
    fn from(record: &DomainRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            record_type: record.record_type.as_str().to_string(),
            ttl_sec: record.ttl_sec,
            target: record.target.clone(),
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            protocol: record.protocol.clone().unwrap_or_default(),
            service: record.service.clone().unwrap_or_default(),
            tag: record.tag.clone().unwrap_or_default(),
        }
    }
}

impl From<DomainRecord> for DomainRecordResult {
    fn from(record: DomainRecord) -> Self {
        Self {
            id: record.id,
            record_type: record.record_type.into(),
            ttl_sec: record.ttl_sec,
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            name: record.name,
            target: record.target,
            protocol: record.protocol.unwrap_or_default(),
            service: record.service.unwrap_or_default(),
            tag: record.tag.unwrap_or_default(),
        }
    }
}
