//! Static description of the fields a domain record lookup accepts and returns.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Int,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Int => "int",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    /// Must be supplied by the caller.
    Required,
    /// May be supplied by the caller and is echoed back in the result.
    Optional,
    /// Filled in from the remote record, never settable.
    Computed,
}

impl FieldRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::Required => "required",
            FieldRole::Optional => "optional",
            FieldRole::Computed => "computed",
        }
    }

    pub fn is_settable(&self) -> bool {
        !matches!(self, FieldRole::Computed)
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub role: FieldRole,
    pub description: &'static str,
}

const fn field(
    name: &'static str,
    kind: FieldKind,
    role: FieldRole,
    description: &'static str,
) -> FieldSchema {
    FieldSchema {
        name,
        kind,
        role,
        description,
    }
}

static DOMAIN_RECORD_SCHEMA: [FieldSchema; 12] = [
    field(
        "id",
        FieldKind::String,
        FieldRole::Optional,
        "The unique ID of the Record.",
    ),
    field(
        "name",
        FieldKind::String,
        FieldRole::Optional,
        "The name of the Record.",
    ),
    field(
        "domain_id",
        FieldKind::String,
        FieldRole::Required,
        "The associated domain's ID.",
    ),
    field(
        "type",
        FieldKind::String,
        FieldRole::Computed,
        "The type of Record this is in the DNS system.",
    ),
    field(
        "ttl_sec",
        FieldKind::Int,
        FieldRole::Computed,
        "The amount of time in seconds that this Domain's records may be cached by resolvers or other domain servers.",
    ),
    field(
        "target",
        FieldKind::String,
        FieldRole::Computed,
        "The target for this Record. For A and AAAA records, this is the address the named Domain should resolve to.",
    ),
    field(
        "priority",
        FieldKind::Int,
        FieldRole::Computed,
        "The priority of the target host. Lower values are preferred.",
    ),
    field(
        "weight",
        FieldKind::Int,
        FieldRole::Computed,
        "The relative weight of this Record. Higher values are preferred.",
    ),
    field(
        "port",
        FieldKind::Int,
        FieldRole::Computed,
        "The port this Record points to.",
    ),
    field(
        "protocol",
        FieldKind::String,
        FieldRole::Computed,
        "The protocol this Record's service communicates with. Only valid for SRV records.",
    ),
    field(
        "service",
        FieldKind::String,
        FieldRole::Computed,
        "The service this Record identified. Only valid for SRV records.",
    ),
    field(
        "tag",
        FieldKind::String,
        FieldRole::Computed,
        "The tag portion of a CAA record.",
    ),
];

pub fn domain_record_schema() -> &'static [FieldSchema] {
    &DOMAIN_RECORD_SCHEMA
}

pub fn field_schema(name: &str) -> Option<&'static FieldSchema> {
    DOMAIN_RECORD_SCHEMA.iter().find(|f| f.name == name)
}
