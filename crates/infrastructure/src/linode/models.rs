use linode_records_domain::DomainRecord;
use serde::Deserialize;

/// Envelope of every paginated Linode list response.
#[derive(Debug, Deserialize)]
pub struct RecordsPage {
    pub data: Vec<DomainRecord>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub results: u32,
}

/// Error body Linode returns with any non-2xx status.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl ApiErrors {
    /// All reasons joined into one line, each prefixed by its field when present.
    pub fn reason(&self) -> Option<String> {
        let reasons: Vec<String> = self
            .errors
            .iter()
            .filter(|e| !e.reason.is_empty())
            .map(|e| match e.field.as_deref() {
                Some(field) if !field.is_empty() => format!("[{}] {}", field, e.reason),
                _ => e.reason.clone(),
            })
            .collect();

        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        }
    }
}
