use anyhow::Result;
use reqsign_core::{Context, OsFileRead, ProvideCredential, StaticEnv};
use reqsign_oauth1::{Config, DefaultCredentialProvider, SignatureMethod};
use std::collections::HashMap;

const CONFIG: &str = r#"
[default]
consumer_key = default_key
consumer_secret = default_secret

[rsa]
consumer_key = rsa_key
token = rsa_token
token_secret = rsa_token_secret
private_key_file = ~/.oauth1/key.pem
"#;

fn home_with_config() -> Result<tempfile::TempDir> {
    let home = tempfile::tempdir()?;
    std::fs::create_dir_all(home.path().join(".oauth1"))?;
    std::fs::write(home.path().join(".oauth1/config"), CONFIG)?;
    std::fs::write(
        home.path().join(".oauth1/key.pem"),
        include_str!("../testdata/private_key.pem"),
    )?;
    Ok(home)
}

#[tokio::test]
async fn test_default_provider_reads_profile_from_env() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let home = home_with_config()?;
    let ctx = Context::new().with_file_read(OsFileRead).with_env(StaticEnv {
        home_dir: Some(home.path().to_path_buf()),
        envs: HashMap::from([("OAUTH_PROFILE".to_string(), "rsa".to_string())]),
    });

    let cred = DefaultCredentialProvider::new(Config::new())
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "rsa_key");
    assert_eq!(cred.token.as_deref(), Some("rsa_token"));
    assert!(cred.private_key.is_some());

    // The loaded key signs.
    let signature = reqsign_oauth1::compute_signature(
        SignatureMethod::RsaSha1,
        "GET&http%3A%2F%2Fexample.com%2F&",
        &reqsign_oauth1::CredentialContext::from_credential(&cred, "n", "1"),
        cred.private_key.as_ref(),
    )?;
    assert!(!signature.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_default_provider_explicit_config_wins() -> Result<()> {
    let home = home_with_config()?;
    let ctx = Context::new().with_file_read(OsFileRead).with_env(StaticEnv {
        home_dir: Some(home.path().to_path_buf()),
        envs: HashMap::new(),
    });

    let config = Config::new()
        .with_consumer_key("explicit_key")
        .with_consumer_secret("explicit_secret");
    let cred = DefaultCredentialProvider::new(config)
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "explicit_key");

    let cred = DefaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "default_key");
    assert_eq!(cred.consumer_secret.as_deref(), Some("default_secret"));

    Ok(())
}
