//! Signature base string construction.
//!
//! - [Signature Base String (RFC 5849 3.4.1)](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1)

use http::Method;
use http::Uri;
use reqsign_core::{Error, Result};

use crate::parameter::percent_encode;

/// Build the base string uri: scheme and host in lowercase, default port
/// dropped, path kept as sent, query removed.
///
/// ```text
/// HTTP://Example.com:80/r%20v/X?id=123 => http://example.com/r%20v/X
/// ```
pub fn base_uri(uri: &Uri) -> Result<String> {
    let scheme = uri
        .scheme_str()
        .ok_or_else(|| Error::request_invalid("uri without scheme can't be signed"))?
        .to_ascii_lowercase();
    let host = uri
        .host()
        .ok_or_else(|| Error::request_invalid("uri without host can't be signed"))?
        .to_ascii_lowercase();

    let default_port = match scheme.as_str() {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    };

    let mut s = String::with_capacity(scheme.len() + host.len() + uri.path().len() + 9);
    s.push_str(&scheme);
    s.push_str("://");
    s.push_str(&host);
    if let Some(port) = uri.port_u16() {
        if Some(port) != default_port {
            s.push(':');
            s.push_str(&port.to_string());
        }
    }

    match uri.path() {
        "" => s.push('/'),
        path => s.push_str(path),
    }

    Ok(s)
}

/// Join method, base uri and normalized parameters into the string that
/// gets signed.
///
/// ```text
/// METHOD&percent_encode(base_uri)&percent_encode(normalized_parameters)
/// ```
///
/// The normalized parameters are encoded a second time here.
pub fn signature_base_string(method: &Method, base_uri: &str, normalized: &str) -> String {
    let method = method.as_str().to_ascii_uppercase();
    let base_uri = percent_encode(base_uri);
    let normalized = percent_encode(normalized);

    let mut s = String::with_capacity(method.len() + base_uri.len() + normalized.len() + 2);
    s.push_str(&method);
    s.push('&');
    s.push_str(&base_uri);
    s.push('&');
    s.push_str(&normalized);
    s
}
