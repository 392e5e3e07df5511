mod golden;
mod properties;
mod signer;

use reqsign_oauth1::CredentialContext;

pub const TEST_PRIVATE_KEY: &str = include_str!("../testdata/private_key.pem");

/// Initialize logging for a test.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Consumer and token from the OAuth Core 1.0 appendix.
pub fn photos_context() -> CredentialContext {
    CredentialContext::new("dpf43f3p2l4k3l03", "kllo9940pd9333jh", "1191242096")
        .with_consumer_secret("kd94hf93k423kf44")
        .with_token("nnch734d00sl2jdk")
        .with_token_secret("pfkkdhi9sl3r4s00")
}
