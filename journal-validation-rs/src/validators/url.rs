//! URL validators
//!
//! Image links on memory records must be absolute `http`/`https` URLs with a
//! fully qualified host or an IP literal.

use crate::errors::{CheckResult, ValidationError};
use crate::MAX_URL_CHARS;
use std::net::Ipv4Addr;
use url::{Host, Url};

/// Schemes accepted for image links
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https"];

fn invalid(reason: &str) -> CheckResult<()> {
    Err(ValidationError::format(format!("Invalid URL: {}", reason)))
}

/// Validate that a domain is a fully qualified name without underscores or
/// a trailing dot
pub fn fully_qualified_domain(domain: &str) -> CheckResult<()> {
    if domain.ends_with('.') {
        return invalid("host has a trailing dot");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return invalid("host is not a fully qualified domain name");
    }

    for label in &labels {
        if label.is_empty() || label.len() > 63 {
            return invalid("host label has an invalid length");
        }
        if label.contains('_') {
            return invalid("host contains underscores");
        }
        if label.starts_with('-') || label.ends_with('-') {
            return invalid("host label starts or ends with a hyphen");
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return invalid("host contains invalid characters");
        }
    }

    let tld = labels[labels.len() - 1];
    let alphabetic = tld.len() >= 2 && tld.chars().all(|c| c.is_alphabetic());
    let punycode = tld.len() >= 4
        && tld.starts_with("xn")
        && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !(alphabetic || punycode) {
        return invalid("host has an invalid top-level domain");
    }

    Ok(())
}

/// Validate that a string is an absolute http(s) URL
pub fn http_url(s: &str) -> CheckResult<()> {
    if s.is_empty() || s.chars().count() > MAX_URL_CHARS {
        return invalid("length out of range");
    }
    if s.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return invalid("contains whitespace or angle brackets");
    }
    if s.starts_with("//") {
        return invalid("protocol-relative URLs are not allowed");
    }

    let (scheme, rest) = match s.split_once("://") {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => return invalid("protocol is required"),
    };
    if !ALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
        return invalid("protocol must be http or https");
    }

    let url = match Url::parse(s) {
        Ok(url) => url,
        Err(e) => return invalid(&e.to_string()),
    };

    match url.host() {
        Some(Host::Domain(domain)) => fully_qualified_domain(domain),
        // The parser rewrites decimal, hex and shortened hosts into IPv4
        // addresses, so only a dotted quad as written counts as an IP host
        Some(Host::Ipv4(_)) => {
            let written = written_host(rest);
            if written.parse::<Ipv4Addr>().is_ok() {
                Ok(())
            } else {
                fully_qualified_domain(written)
            }
        }
        Some(Host::Ipv6(_)) => Ok(()),
        None => invalid("URL has no host component"),
    }
}

/// Host text of a non-bracketed authority, without userinfo or port
fn written_host(after_scheme: &str) -> &str {
    let authority = after_scheme
        .split(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    host_port.split(':').next().unwrap_or_default()
}

/// Returns true if the string is an acceptable image link URL
pub fn is_valid_url(s: &str) -> bool {
    http_url(s).is_ok()
}

/// Returns true if the URL looks like it points at an image, judged by
/// extension or by hosting domain
pub fn is_image_url<E, H>(url: &str, extensions: &[E], hosts: &[H]) -> bool
where
    E: AsRef<str>,
    H: AsRef<str>,
{
    let lowercase = url.to_lowercase();

    extensions
        .iter()
        .any(|ext| lowercase.contains(&ext.as_ref().to_lowercase()))
        || hosts
            .iter()
            .any(|host| lowercase.contains(&host.as_ref().to_lowercase()))
}
