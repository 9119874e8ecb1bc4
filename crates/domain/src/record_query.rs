use crate::errors::DomainError;
use crate::schema::{domain_record_schema, field_schema, FieldRole};
use std::collections::HashSet;

/// Raw identifiers exactly as the caller supplied them.
///
/// Empty strings stand for "not supplied", matching how an input map with
/// missing keys reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLookupInput {
    pub domain_id: String,
    pub name: String,
    pub id: String,
}

impl RecordLookupInput {
    pub fn new(
        domain_id: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn by_id(domain_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(domain_id, "", id)
    }

    pub fn by_name(domain_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(domain_id, name, "")
    }

    /// Builds the input from a key/value configuration map.
    ///
    /// Every key must be a settable field of the domain record schema and
    /// every required field must be present.
    pub fn from_map<I, K, V>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut input = Self::default();
        let mut seen = HashSet::new();

        for (key, value) in entries {
            let key = key.as_ref();
            let schema =
                field_schema(key).ok_or_else(|| DomainError::UnknownField(key.to_string()))?;
            if !schema.role.is_settable() {
                return Err(DomainError::ComputedField(key.to_string()));
            }

            let value = value.as_ref().to_string();
            match schema.name {
                "domain_id" => input.domain_id = value,
                "name" => input.name = value,
                "id" => input.id = value,
                _ => return Err(DomainError::UnknownField(key.to_string())),
            }
            seen.insert(schema.name);
        }

        if let Some(missing) = domain_record_schema()
            .iter()
            .find(|f| f.role == FieldRole::Required && !seen.contains(f.name))
        {
            return Err(DomainError::MissingField(missing.name.to_string()));
        }

        Ok(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    ById(i64),
    ByName(String),
}

/// A validated lookup: numeric domain ID plus exactly one way to pick the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub domain_id: i64,
    pub selector: RecordSelector,
}

impl RecordQuery {
    /// Validates the raw input. When both an ID and a name are given the ID wins.
    pub fn parse(input: &RecordLookupInput) -> Result<Self, DomainError> {
        if input.name.is_empty() && input.id.is_empty() {
            return Err(DomainError::IdentifierRequired);
        }

        let domain_id = input
            .domain_id
            .parse::<i64>()
            .map_err(|_| DomainError::NonNumericDomainId(input.domain_id.clone()))?;

        let selector = if !input.id.is_empty() {
            let id = input
                .id
                .parse::<i64>()
                .map_err(|_| DomainError::NonNumericRecordId(input.id.clone()))?;
            RecordSelector::ById(id)
        } else {
            RecordSelector::ByName(input.name.clone())
        };

        Ok(Self {
            domain_id,
            selector,
        })
    }

    pub fn search_term(&self) -> String {
        match &self.selector {
            RecordSelector::ById(id) => id.to_string(),
            RecordSelector::ByName(name) => name.clone(),
        }
    }
}
