use crate::utils::error::{ImportError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses an absolute `http`/`https` URL, reporting failures against `field`.
pub fn validate_url(field: &str, raw: &str) -> Result<Url> {
    let invalid = |reason: String| ImportError::InvalidConfigValue {
        field: field.to_string(),
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(format!("not an absolute URL ({})", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme '{}' is not http or https", url.scheme())));
    }
    Ok(url)
}

pub fn validate_required_field<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ImportError::MissingConfig {
            field: field_name.to_string(),
        }),
    }
}
