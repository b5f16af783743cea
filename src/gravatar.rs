//! # Avatar Service URLs
//!
//! Classifies avatar URLs against known hosting services and builds Gravatar
//! lookup URLs. Classification is a literal, case-sensitive prefix check
//! with no URL parsing and no network access.

/// Base URL of the Gravatar image service.
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

/// Checks whether `url` points at the avatar service rooted at `base_url`.
///
/// An absent URL is treated as the empty string, which no non-empty base
/// prefixes.
pub fn is_gravatar_url(url: Option<&str>, base_url: &str) -> bool {
    url.unwrap_or_default().starts_with(base_url)
}

/// Checks whether `url` points at any of the given CORS-enabled avatar
/// services. An empty list classifies nothing.
pub fn is_cors_avatar_url<S: AsRef<str>>(url: Option<&str>, cors_avatar_urls: &[S]) -> bool {
    let url = url.unwrap_or_default();
    cors_avatar_urls
        .iter()
        .any(|base_url| url.starts_with(base_url.as_ref()))
}

/// Gravatar lookup URL for `key`, usually an email address.
///
/// The key is trimmed and lowercased before hashing, per the service's
/// convention, so differently-spelled forms of one address agree. The
/// `d=404` parameter makes the service answer 404 when no avatar exists,
/// letting callers fall back to an initials avatar.
pub fn gravatar_url(key: &str, base_url: &str) -> String {
    let digest = md5::compute(key.trim().to_lowercase());
    format!("{}{:x}?d=404&size=200", base_url, digest)
}
