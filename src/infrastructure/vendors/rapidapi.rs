//! RapidAPI request headers shared by the marketplace-hosted vendors.

use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const KEY_HEADER: HeaderName = HeaderName::from_static("x-rapidapi-key");
const HOST_HEADER: HeaderName = HeaderName::from_static("x-rapidapi-host");

/// Returns the API host for a base URL, without scheme or path.
#[must_use]
pub fn host_of(base_url: &str) -> &str {
    let without_scheme = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
}

/// Builds the key and host headers.
///
/// # Errors
///
/// Returns [`VendorError::Authentication`] if the key or host contains bytes
/// that are not valid in a header value.
pub fn headers(api_key: &str, host: &str) -> VendorResult<HeaderMap> {
    let key = HeaderValue::from_str(api_key)
        .map_err(|_| VendorError::authentication("API key is not a valid header value"))?;
    let host = HeaderValue::from_str(host)
        .map_err(|_| VendorError::authentication("API host is not a valid header value"))?;

    let mut map = HeaderMap::with_capacity(2);
    map.insert(KEY_HEADER, key);
    map.insert(HOST_HEADER, host);
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(host_of("https://flights-sky.p.rapidapi.com"), "flights-sky.p.rapidapi.com");
        assert_eq!(host_of("http://127.0.0.1:8080/api"), "127.0.0.1:8080");
        assert_eq!(host_of("example.com"), "example.com");
    }

    #[test]
    fn builds_headers() {
        let map = headers("secret", "example.com").unwrap();
        assert_eq!(map.get("x-rapidapi-key").unwrap(), "secret");
        assert_eq!(map.get("x-rapidapi-host").unwrap(), "example.com");
    }

    #[test]
    fn rejects_control_characters() {
        assert!(headers("bad\nkey", "example.com").unwrap_err().is_auth_failure());
    }
}
