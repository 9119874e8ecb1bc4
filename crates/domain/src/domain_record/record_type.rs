use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Record types the Linode DNS manager accepts.
///
/// Any other value the API sends is kept verbatim in `Other`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    AAAA,
    NS,
    MX,
    CNAME,
    TXT,
    SRV,
    PTR,
    CAA,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::PTR => "PTR",
            RecordType::CAA => "CAA",
            RecordType::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Other(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecordType::from(s.to_string()))
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "NS" => RecordType::NS,
            "MX" => RecordType::MX,
            "CNAME" => RecordType::CNAME,
            "TXT" => RecordType::TXT,
            "SRV" => RecordType::SRV,
            "PTR" => RecordType::PTR,
            "CAA" => RecordType::CAA,
            _ => RecordType::Other(value),
        }
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
