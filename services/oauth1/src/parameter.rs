//! Parameter collection and normalization.
//!
//! - [Normalized Parameters (RFC 5849 3.4.1.3.2)](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.2)

use percent_encoding::utf8_percent_encode;
use reqsign_core::{Error, Result};

use crate::constants::*;

/// Where a parameter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSource {
    /// Query string of the request uri.
    Query,
    /// `application/x-www-form-urlencoded` request body.
    Body,
    /// OAuth protocol parameter.
    Protocol,
    /// Content of a multipart file upload. Can never be signed.
    File,
}

/// A name/value pair that may take part in the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, not encoded.
    pub name: String,
    /// Parameter value, not encoded.
    pub value: String,
    /// Source of this parameter.
    pub source: ParameterSource,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        source: ParameterSource,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a query parameter.
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterSource::Query)
    }

    /// Create a form body parameter.
    pub fn body(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterSource::Body)
    }

    /// Create a protocol parameter.
    pub fn protocol(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterSource::Protocol)
    }

    /// Whether this parameter is part of the signature base string.
    ///
    /// `oauth_signature` is what we are computing and `realm` only lives in
    /// the header, so neither is signed.
    fn is_signable(&self) -> bool {
        match self.source {
            ParameterSource::Protocol => self.name != OAUTH_SIGNATURE && self.name != REALM,
            _ => self.name != OAUTH_SIGNATURE,
        }
    }
}

/// Percent encode input with the OAuth unreserved set, uppercase hex.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Normalize parameters into the parameter component of the base string.
///
/// Names and values are encoded first, then sorted by name and value in
/// byte order. Duplicates are kept. The result doesn't depend on the input
/// order.
///
/// ```text
/// a2=r%20b&a3=2%20q&a3=a&b5=%3D%253D&c%40=&c2=
/// ```
///
/// Returns [`reqsign_core::ErrorKind::UnsupportedParameterSource`] if any
/// parameter is multipart file content.
pub fn normalize_parameters(params: &[Parameter]) -> Result<String> {
    let mut pairs = Vec::with_capacity(params.len());
    for p in params {
        if p.source == ParameterSource::File {
            return Err(Error::unsupported_parameter_source(format!(
                "multipart file content {:?} can't be signed",
                p.name
            )));
        }
        if !p.is_signable() {
            continue;
        }

        pairs.push((percent_encode(&p.name), percent_encode(&p.value)));
    }

    // Tuple ordering compares name first, value second.
    pairs.sort_unstable();

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }

    Ok(s)
}
