use http::header::AUTHORIZATION;
use reqsign_core::{Context, OsEnv, OsFileRead, Result, Signer};
use reqsign_oauth1::{Config, DefaultCredentialProvider, RequestSigner, SignatureMethod};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);

    // Fall back to demo credentials so the example always prints something.
    let mut config = Config::new();
    if ctx.env_var("OAUTH_CONSUMER_KEY").is_none() {
        println!("No credentials found in environment, using demo credentials");
        config = config
            .with_consumer_key("dpf43f3p2l4k3l03")
            .with_consumer_secret("kd94hf93k423kf44")
            .with_token("nnch734d00sl2jdk")
            .with_token_secret("pfkkdhi9sl3r4s00");
    }

    let method = ctx
        .env_var("OAUTH_SIGNATURE_METHOD")
        .map(|v| SignatureMethod::from_request_value(&v))
        .unwrap_or_default();

    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(config),
        RequestSigner::new()
            .with_signature_method(method)
            .with_realm("Photos"),
    );

    let (mut parts, _) =
        http::Request::get("http://photos.example.net/photos?file=vacation.jpg&size=original")
            .body(())?
            .into_parts();
    signer.sign(&mut parts).await?;

    if let Some(value) = parts.headers.get(AUTHORIZATION) {
        println!("{}: {}", AUTHORIZATION, value.to_str()?);
    }
    Ok(())
}
