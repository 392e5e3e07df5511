use async_trait::async_trait;
use reqsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use super::{ConfigFileCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};

/// Default loader for OAuth 1.0a credentials.
///
/// This loader will try to load credentials in the following order:
/// 1. From the given [`Config`] and environment variables
/// 2. From the config file (`~/.oauth1/config` unless configured otherwise)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new(config: Config) -> Self {
        let mut config_file = ConfigFileCredentialProvider::new();
        if let Some(path) = &config.config_file {
            config_file = config_file.with_config_file(path);
        }
        if let Some(profile) = &config.profile {
            config_file = config_file.with_profile(profile);
        }

        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new().with_config(config))
            .push(config_file);

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
