use crate::OutputFormat;
use linode_records_domain::{DomainRecordResult, FieldSchema};
use std::fmt::Write;

pub fn render_result(result: &DomainRecordResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_attributes(result)),
    }
}

fn render_attributes(result: &DomainRecordResult) -> String {
    let attributes = result.attributes();
    let width = attributes.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (key, value) in attributes {
        let _ = writeln!(out, "{:<width$}  {}", key, value, width = width);
    }
    out.trim_end().to_string()
}

pub fn render_schema(fields: &[FieldSchema]) -> String {
    let name_width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for field in fields {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<6}  {:<8}  {}",
            field.name,
            field.kind.as_str(),
            field.role.as_str(),
            field.description,
            name_width = name_width
        );
    }
    out
}
