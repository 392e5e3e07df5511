use async_trait::async_trait;
use reqsign_core::{Context, ProvideCredential, Result};
use rsa::RsaPrivateKey;

use crate::Credential;

/// StaticCredentialProvider provides static credentials that are provided at initialization time.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with consumer key and secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            credential: Credential::new(consumer_key, consumer_secret),
        }
    }

    /// Set the token pair.
    pub fn with_token(mut self, token: &str, token_secret: &str) -> Self {
        self.credential = self.credential.with_token(token, token_secret);
        self
    }

    /// Set the RSA private key used by RSA-SHA1.
    pub fn with_private_key(mut self, key: RsaPrivateKey) -> Self {
        self.credential = self.credential.with_private_key(key);
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
