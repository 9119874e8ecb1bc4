use super::RecordType;
use serde::{Deserialize, Serialize};

/// A DNS resource record as Linode stores it under a domain.
///
/// Linode sends `null` for `protocol`, `service` and `tag` on record types
/// where they do not apply, so they stay optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    #[serde(default)]
    pub ttl_sec: i64,

    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub priority: i64,

    #[serde(default)]
    pub weight: i64,

    #[serde(default)]
    pub port: i64,

    #[serde(default)]
    pub protocol: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl DomainRecord {
    pub fn new(id: i64, name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            id,
            name: name.into(),
            record_type,
            ttl_sec: 0,
            target: String::new(),
            priority: 0,
            weight: 0,
            port: 0,
            protocol: None,
            service: None,
            tag: None,
            created: None,
            updated: None,
        }
    }

    pub fn with_ttl(mut self, ttl_sec: i64) -> Self {
        self.ttl_sec = ttl_sec;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_service(
        mut self,
        service: impl Into<String>,
        protocol: impl Into<String>,
        weight: i64,
        port: i64,
    ) -> Self {
        self.service = Some(service.into());
        self.protocol = Some(protocol.into());
        self.weight = weight;
        self.port = port;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
