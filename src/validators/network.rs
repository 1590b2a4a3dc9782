//! Network format rules: IP addresses, URLs and query strings.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use url::Url;

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

crate::rule! {
    /// Validates that a string is an IP address (v4 or v6).
    pub Ip for str;
    check(input) { input.parse::<IpAddr>().is_ok() }
    fail(input) { Error::new(codes::IS_IP, templates::IS_IP) }
    fn ip();
}

crate::rule! {
    /// Validates that a string is an IPv4 address.
    pub Ipv4 for str;
    check(input) { input.parse::<Ipv4Addr>().is_ok() }
    fail(input) { Error::new(codes::IS_IPV4, templates::IS_IPV4) }
    fn ipv4();
}

crate::rule! {
    /// Validates that a string is an IPv6 address.
    pub Ipv6 for str;
    check(input) { input.parse::<Ipv6Addr>().is_ok() }
    fail(input) { Error::new(codes::IS_IPV6, templates::IS_IPV6) }
    fn ipv6();
}

crate::rule! {
    /// Validates that a string is an absolute URL.
    pub UrlStr for str;
    check(input) { Url::parse(input).is_ok() }
    fail(input) { Error::new(codes::IS_URL, templates::IS_URL) }
    fn url_str();
}

crate::rule! {
    /// Validates that a string is a URL with a specific scheme.
    pub UrlWithScheme { scheme: String } for str;
    check(self, input) {
        Url::parse(input).is_ok_and(|url| url.scheme() == self.scheme)
    }
    fail(self, input) {
        Error::new(codes::IS_URL_WITH_SCHEME, templates::IS_URL_WITH_SCHEME)
            .with_param("scheme", &self.scheme)
    }
    new(scheme: impl Into<String>) { Self { scheme: scheme.into() } }
    fn url_with_scheme(scheme: impl Into<String>);
}

crate::rule! {
    /// Validates that a string is a request URI: an absolute URL or an
    /// absolute path (optionally with a query).
    pub RequestUri for str;
    check(input) {
        if input.starts_with('/') {
            !input.contains(char::is_whitespace)
        } else {
            Url::parse(input).is_ok()
        }
    }
    fail(input) { Error::new(codes::IS_REQUEST_URI, templates::IS_REQUEST_URI) }
    fn request_uri();
}

/// Validity of a percent-encoded query string: `%` must introduce two hex
/// digits, and raw whitespace or fragments are rejected.
fn is_query(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len()
                    || !bytes[i + 1].is_ascii_hexdigit()
                    || !bytes[i + 2].is_ascii_hexdigit()
                {
                    return false;
                }
                i += 3;
            }
            b'#' => return false,
            b if b.is_ascii_whitespace() => return false,
            _ => i += 1,
        }
    }
    true
}

crate::rule! {
    /// Validates that a string is a well-formed URL query string.
    pub UrlQuery for str;
    check(input) { is_query(input) }
    fail(input) { Error::new(codes::IS_URL_QUERY, templates::IS_URL_QUERY) }
    fn url_query();
}
