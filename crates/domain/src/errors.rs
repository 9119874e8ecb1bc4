use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record name or ID is required")]
    IdentifierRequired,

    #[error("Domain ID \"{0}\" must be numeric")]
    NonNumericDomainId(String),

    #[error("Domain record ID \"{0}\" must be numeric")]
    NonNumericRecordId(String),

    #[error("Field \"{0}\" is required")]
    MissingField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field \"{0}\" is computed and cannot be set")]
    ComputedField(String),

    #[error("Error fetching domain record: {0}")]
    RecordFetchFailed(#[source] Box<DomainError>),

    #[error("Error listing domain records: {0}")]
    RecordListFailed(#[source] Box<DomainError>),

    #[error("Domain record \"{name}\" for domain {domain_id} was not found")]
    RecordNotFound { name: String, domain_id: i64 },

    #[error("[{status:03}] {reason}")]
    Api { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for errors raised while checking caller input, before any remote call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::IdentifierRequired
                | DomainError::NonNumericDomainId(_)
                | DomainError::NonNumericRecordId(_)
                | DomainError::MissingField(_)
                | DomainError::UnknownField(_)
                | DomainError::ComputedField(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            DomainError::RecordNotFound { .. } => true,
            DomainError::Api { status, .. } => *status == 404,
            DomainError::RecordFetchFailed(cause) | DomainError::RecordListFailed(cause) => {
                cause.is_not_found()
            }
            _ => false,
        }
    }
}
