//! URL validation for the shorten endpoint
//!
//! Only absolute `http`/`https` URLs with a host are accepted. The check runs
//! before anything reaches the store.

use thiserror::Error;
use url::{Host, Url};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("dangerous protocol blocked: {0}")]
    DangerousProtocol(String),
    #[error("invalid protocol {0}, only http:// and https:// are allowed")]
    InvalidProtocol(String),
    #[error("invalid URL format: {0}")]
    InvalidFormat(String),
}

const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "contains whitespace or control characters".to_string(),
        ));
    }

    let lower = url.to_ascii_lowercase();

    if let Some(proto) = DANGEROUS_PROTOCOLS.iter().find(|p| lower.starts_with(*p)) {
        return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let proto = lower.split(':').next().unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(format!("{proto}:")));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if is_routable_domain(domain) => Ok(()),
        Some(Host::Domain(domain)) => Err(UrlValidationError::InvalidFormat(format!(
            "host {domain} is not localhost or a domain with a TLD"
        ))),
        None => Err(UrlValidationError::InvalidFormat("missing host".to_string())),
    }
}

/// `localhost`, or dotted labels ending in an alphabetic TLD of 2+ chars
fn is_routable_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain == "localhost" {
        return true;
    }

    let mut labels = domain.split('.');
    let tld = labels.next_back().unwrap_or_default();
    let has_parent = labels.next().is_some_and(|label| !label.is_empty());

    has_parent && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
