//! Signature computation.
//!
//! - [Signature (RFC 5849 3.4)](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4)

use log::debug;
use reqsign_core::hash::{base64_encode, base64_hmac_sha1};
use reqsign_core::{Error, Result};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha1::Sha1;

use crate::credential::CredentialContext;
use crate::parameter::percent_encode;
use crate::SignatureMethod;

/// Compute the base64 signature of `base_string`.
///
/// `private_key` is only consulted for RSA-SHA1, the secrets in `ctx` only
/// for HMAC-SHA1 and PLAINTEXT.
pub fn compute_signature(
    method: SignatureMethod,
    base_string: &str,
    ctx: &CredentialContext,
    private_key: Option<&RsaPrivateKey>,
) -> Result<String> {
    match method {
        SignatureMethod::PlainText => signing_key(ctx),
        SignatureMethod::HmacSha1 => {
            let key = signing_key(ctx)?;
            Ok(base64_hmac_sha1(key.as_bytes(), base_string.as_bytes()))
        }
        SignatureMethod::RsaSha1 => {
            let key = private_key.ok_or_else(|| {
                Error::missing_credential("private key is required for RSA-SHA1")
            })?;
            sign_rsa_sha1(key, base_string)
        }
    }
}

/// `percent_encode(consumer_secret)&percent_encode(token_secret)`
///
/// A missing token secret is treated as empty, a missing consumer secret is
/// an error.
fn signing_key(ctx: &CredentialContext) -> Result<String> {
    let consumer_secret = ctx.consumer_secret.as_deref().ok_or_else(|| {
        Error::missing_credential("consumer secret is required for HMAC-SHA1 and PLAINTEXT")
    })?;
    let token_secret = ctx.token_secret.as_deref().unwrap_or_default();

    Ok(format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    ))
}

fn sign_rsa_sha1(key: &RsaPrivateKey, base_string: &str) -> Result<String> {
    let signing_key = SigningKey::<Sha1>::new(key.clone());
    let signature = signing_key
        .try_sign(base_string.as_bytes())
        .map_err(|e| Error::invalid_key_material("failed to sign with RSA-SHA1").with_source(e))?;

    Ok(base64_encode(&signature.to_bytes()))
}

/// Load an RSA private key from PEM.
///
/// Both `BEGIN PRIVATE KEY` (PKCS#8) and `BEGIN RSA PRIVATE KEY` (PKCS#1)
/// are accepted.
pub fn load_private_key(pem: &str) -> Result<RsaPrivateKey> {
    let pem = pem.trim();
    if pem.contains("BEGIN RSA PRIVATE KEY") {
        debug!("loading PKCS#1 private key");
        return RsaPrivateKey::from_pkcs1_pem(pem).map_err(|e| {
            Error::invalid_key_material("failed to decode PKCS#1 private key").with_source(e)
        });
    }

    debug!("loading PKCS#8 private key");
    RsaPrivateKey::from_pkcs8_pem(pem).map_err(|e| {
        Error::invalid_key_material("failed to decode PKCS#8 private key").with_source(e)
    })
}
