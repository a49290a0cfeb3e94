use serde::Deserialize;

/// Result ordering shared by every course listing.
pub const COURSE_ORDER: &str =
    "term.desc,department.asc,course_number.asc,course_letter.asc,section_number.asc";

/// PostgREST error payload; every field is optional in practice.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostgrestError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestError {
    pub fn describe(&self, fallback: &str) -> String {
        match (&self.message, &self.details) {
            (Some(message), Some(details)) => format!("{} ({})", message, details),
            (Some(message), None) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Builds an `in.(...)` filter value, quoting each item.
pub fn in_filter(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}
