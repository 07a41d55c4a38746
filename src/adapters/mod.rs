// Adapters layer: concrete implementations for external systems (input files, http).

pub mod csv_source;
pub mod jira;
