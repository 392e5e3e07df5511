use super::init;
use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request, Uri};
use pretty_assertions::assert_eq;
use reqsign_core::{Context, Signer, StaticEnv};
use reqsign_oauth1::{
    authorize, Credential, CredentialContext, EnvCredentialProvider, ParameterHandling,
    RequestDescriptor, RequestSigner, SignatureTreatment, SigningOptions,
    StaticCredentialProvider,
};
use std::collections::HashMap;
use std::str::FromStr;

/// Pull the quoted value of `name` out of an Authorization header.
fn header_field<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .trim_start_matches("OAuth ")
        .split(", ")
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim_matches('"'))
}

#[tokio::test]
async fn test_signer_signs_with_static_credential() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
            .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00"),
        RequestSigner::new(),
    );

    let url = "http://photos.example.net/photos?file=vacation.jpg&size=original";
    let (mut parts, _) = Request::get(url).body(())?.into_parts();
    signer.sign(&mut parts).await?;

    let header = parts
        .headers
        .get(AUTHORIZATION)
        .expect("authorization header must be set")
        .to_str()?
        .to_string();
    assert!(header.starts_with("OAuth "));

    // Re-run the pure pipeline with the nonce and timestamp the signer drew.
    let nonce = header_field(&header, "oauth_nonce").expect("nonce must be sent");
    let timestamp = header_field(&header, "oauth_timestamp").expect("timestamp must be sent");
    assert_eq!(nonce.len(), 32);

    let ctx = CredentialContext::new("dpf43f3p2l4k3l03", nonce, timestamp)
        .with_consumer_secret("kd94hf93k423kf44")
        .with_token("nnch734d00sl2jdk")
        .with_token_secret("pfkkdhi9sl3r4s00");
    let expected = authorize(
        &RequestDescriptor::new(Method::GET, Uri::from_str(url)?),
        &ctx,
        None,
        &SigningOptions::default(),
    )?;
    assert_eq!(Some(header.as_str()), expected.header());

    Ok(())
}

#[tokio::test]
async fn test_signer_loads_credential_from_env() -> Result<()> {
    init();

    let ctx = Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::from([
            ("OAUTH_CONSUMER_KEY".to_string(), "env_key".to_string()),
            ("OAUTH_CONSUMER_SECRET".to_string(), "env_secret".to_string()),
        ]),
    });
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::new()
            .with_parameter_handling(ParameterHandling::UrlOrPostParameters)
            .with_signature_treatment(SignatureTreatment::Unescaped),
    );

    let (mut parts, _) = Request::get("https://api.example.com/items?page=2")
        .body(())?
        .into_parts();
    signer.sign(&mut parts).await?;

    assert!(parts.headers.get(AUTHORIZATION).is_none());
    let query = parts.uri.query().expect("query must be set");
    assert!(query.starts_with("page=2&oauth_consumer_key=env_key&"));
    assert!(query.contains("oauth_signature="));
    assert!(!query.contains("oauth_token="));

    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential_fails() -> Result<()> {
    let signer = Signer::new(Context::new(), EnvCredentialProvider::new(), RequestSigner::new());

    let (mut parts, _) = Request::get("https://api.example.com/").body(())?.into_parts();
    let err = signer.sign(&mut parts).await.unwrap_err();
    assert_eq!(err.kind(), reqsign_core::ErrorKind::MissingCredential);

    Ok(())
}

#[tokio::test]
async fn test_sign_form_request_signs_body() -> Result<()> {
    let url = "https://api.example.com/update";
    let body = b"status=Hello%20Ladies%20%2B%20Gentlemen";
    let cred = Credential::new("ck", "cs").with_token("t", "ts");

    let (mut parts, _) = Request::post(url)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
        .body(())?
        .into_parts();
    RequestSigner::new()
        .sign_form_request(&Context::new(), &mut parts, body, Some(&cred))
        .await?;
    let header = parts.headers[AUTHORIZATION].to_str()?;

    let nonce = header_field(header, "oauth_nonce").expect("nonce must be sent");
    let timestamp = header_field(header, "oauth_timestamp").expect("timestamp must be sent");
    let ctx = CredentialContext::from_credential(&cred, nonce, timestamp);

    let with_body = RequestDescriptor::new(Method::POST, Uri::from_str(url)?).with_form_body(body);
    let without_body = RequestDescriptor::new(Method::POST, Uri::from_str(url)?);
    let options = SigningOptions::default();

    assert_eq!(
        authorize(&with_body, &ctx, None, &options)?.header(),
        Some(header)
    );
    assert_ne!(
        authorize(&without_body, &ctx, None, &options)?.header(),
        Some(header)
    );

    Ok(())
}
