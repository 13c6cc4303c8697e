use crate::error::MeteomaticsError;
use reqwest::Url;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.meteomatics.com";

/// Parses the endpoint and strips trailing slashes, so path segments can be appended with `/`.
///
/// Only http(s) URLs with a host and without query or fragment are accepted.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String, MeteomaticsError> {
    let invalid = || MeteomaticsError::InvalidBaseUrl(base_url.to_string());
    let url = Url::parse(base_url.trim()).map_err(|_| invalid())?;

    let usable = matches!(url.scheme(), "http" | "https")
        && !url.cannot_be_a_base()
        && url.host_str().is_some_and(|host| !host.is_empty())
        && url.query().is_none()
        && url.fragment().is_none();
    if !usable {
        return Err(invalid());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
