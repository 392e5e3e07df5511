use std::fmt;
use std::str::FromStr;

/// Algorithm used to sign the signature base string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureMethod {
    /// HMAC-SHA1 keyed with the consumer and token secrets.
    #[default]
    HmacSha1,
    /// Consumer and token secrets sent as is. Only for trusted transports.
    PlainText,
    /// RSASSA-PKCS1-v1_5 over SHA1 with the consumer's private key.
    RsaSha1,
}

impl SignatureMethod {
    /// Wire token as sent in `oauth_signature_method`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::PlainText => "PLAINTEXT",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
        }
    }

    /// Parse a wire token.
    ///
    /// Matching is exact. Any token other than `HMAC-SHA1` or `RSA-SHA1`,
    /// including lowercase spellings and garbage, is treated as `PLAINTEXT`.
    pub fn from_request_value(value: &str) -> Self {
        match value {
            "HMAC-SHA1" => SignatureMethod::HmacSha1,
            "RSA-SHA1" => SignatureMethod::RsaSha1,
            _ => SignatureMethod::PlainText,
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SignatureMethod {
    fn from(value: &str) -> Self {
        Self::from_request_value(value)
    }
}

impl FromStr for SignatureMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_request_value(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SignatureMethod::HmacSha1, "HMAC-SHA1"; "hmac sha1")]
    #[test_case(SignatureMethod::PlainText, "PLAINTEXT"; "plaintext")]
    #[test_case(SignatureMethod::RsaSha1, "RSA-SHA1"; "rsa sha1")]
    fn test_round_trip(method: SignatureMethod, token: &str) {
        assert_eq!(method.as_str(), token);
        assert_eq!(method.to_string(), token);
        assert_eq!(SignatureMethod::from_request_value(method.as_str()), method);
    }

    #[test_case("FOO"; "unknown token")]
    #[test_case(""; "empty token")]
    #[test_case("hmac-sha1"; "lowercase token")]
    #[test_case("HMAC-SHA256"; "unsupported digest")]
    fn test_unknown_token_falls_back_to_plaintext(token: &str) {
        assert_eq!(SignatureMethod::from(token), SignatureMethod::PlainText);
        assert_eq!(token.parse::<SignatureMethod>(), Ok(SignatureMethod::PlainText));
    }
}
