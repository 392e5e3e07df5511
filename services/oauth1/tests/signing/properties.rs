use super::{init, photos_context, TEST_PRIVATE_KEY};
use anyhow::Result;
use http::{Method, Uri};
use pretty_assertions::assert_eq;
use reqsign_core::ErrorKind;
use reqsign_oauth1::{
    authorize, compute_signature, load_private_key, normalize_parameters, AuthorizationType,
    CredentialContext, Parameter, RequestDescriptor, SignatureMethod, SigningOptions,
};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use sha1::Sha1;
use std::str::FromStr;
use test_case::test_case;

#[test_case("HMAC-SHA1", SignatureMethod::HmacSha1; "hmac sha1")]
#[test_case("RSA-SHA1", SignatureMethod::RsaSha1; "rsa sha1")]
#[test_case("PLAINTEXT", SignatureMethod::PlainText; "plaintext")]
#[test_case("FOO", SignatureMethod::PlainText; "unknown token")]
#[test_case("hmac-sha1", SignatureMethod::PlainText; "case sensitive")]
fn test_signature_method_codec(token: &str, expected: SignatureMethod) {
    let method = SignatureMethod::from_request_value(token);
    assert_eq!(method, expected);
    assert_eq!(
        SignatureMethod::from_request_value(method.as_str()),
        method
    );
}

#[test]
fn test_normalization_ignores_input_order() -> Result<()> {
    let params = vec![
        Parameter::query("z", "last"),
        Parameter::body("a", "first"),
        Parameter::query("m", "x y"),
        Parameter::protocol("oauth_nonce", "n"),
        Parameter::query("a", "again"),
    ];
    let expected = normalize_parameters(&params)?;

    let mut shuffled = params.clone();
    shuffled.swap(0, 4);
    shuffled.swap(1, 3);
    assert_eq!(normalize_parameters(&shuffled)?, expected);
    assert_eq!(
        expected,
        "a=again&a=first&m=x%20y&oauth_nonce=n&z=last"
    );

    Ok(())
}

#[test]
fn test_pipeline_is_deterministic() -> Result<()> {
    init();

    let req = RequestDescriptor::new(
        Method::POST,
        Uri::from_str("https://api.example.com/1/statuses/update.json?include_entities=true")?,
    )
    .with_form_body(b"status=Hello%20World");
    let ctx = photos_context();
    let key = load_private_key(TEST_PRIVATE_KEY)?;

    for method in [
        SignatureMethod::HmacSha1,
        SignatureMethod::RsaSha1,
        SignatureMethod::PlainText,
    ] {
        let options = SigningOptions {
            signature_method: method,
            ..Default::default()
        };
        let first = authorize(&req, &ctx, Some(&key), &options)?;
        let second = authorize(&req, &ctx, Some(&key), &options)?;
        assert_eq!(first, second, "{method} must be deterministic");
    }

    Ok(())
}

#[test]
fn test_nonce_changes_signature() -> Result<()> {
    let req = RequestDescriptor::new(Method::GET, Uri::from_static("https://example.com/"));
    let options = SigningOptions::default();

    let a = authorize(&req, &photos_context(), None, &options)?;
    let mut ctx = photos_context();
    ctx.nonce = "another_nonce".to_string();
    let b = authorize(&req, &ctx, None, &options)?;
    assert_ne!(a, b);

    Ok(())
}

#[test]
fn test_rsa_sha1_verifies_with_public_key() -> Result<()> {
    let key = load_private_key(TEST_PRIVATE_KEY)?;
    let ctx = CredentialContext::new("rsa_consumer", "n", "1");
    let base = "POST&https%3A%2F%2Fexample.com%2Fresource&a%3D1";

    let signature = compute_signature(SignatureMethod::RsaSha1, base, &ctx, Some(&key))?;
    let raw = reqsign_core::hash::base64_decode(&signature)?;
    let signature = Signature::try_from(raw.as_slice())?;

    VerifyingKey::<Sha1>::new(key.to_public_key()).verify(base.as_bytes(), &signature)?;

    Ok(())
}

#[test]
fn test_missing_credentials() {
    let req = RequestDescriptor::new(Method::GET, Uri::from_static("https://example.com/"));

    // RSA-SHA1 without a key.
    let options = SigningOptions {
        signature_method: SignatureMethod::RsaSha1,
        ..Default::default()
    };
    let err = authorize(&req, &photos_context(), None, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);

    // HMAC-SHA1 without a consumer secret.
    let ctx = CredentialContext::new("ck", "n", "1");
    let err = authorize(&req, &ctx, None, &SigningOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);

    // Access token request without the request token.
    let options = SigningOptions {
        authorization_type: AuthorizationType::AccessToken,
        ..Default::default()
    };
    let ctx = CredentialContext::new("ck", "n", "1").with_consumer_secret("cs");
    let err = authorize(&req, &ctx, None, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);
}

#[test]
fn test_two_legged_request() -> Result<()> {
    let req = RequestDescriptor::new(Method::GET, Uri::from_static("https://example.com/"));
    let ctx = CredentialContext::new("ck", "n", "1").with_consumer_secret("cs");

    let auth = authorize(&req, &ctx, None, &SigningOptions::default())?;
    let header = auth.header().expect("header mode must produce a header");
    assert!(!header.contains("oauth_token="));
    assert!(header.contains("oauth_consumer_key=\"ck\""));

    Ok(())
}
