use log::debug;
use reqsign_core::{Context, Error, Result};

use crate::{load_private_key, Credential};

mod static_;
pub use static_::StaticCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod config_file;
pub use config_file::ConfigFileCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

/// Raw credential values as they were found in a source.
#[derive(Default)]
struct CredentialValues {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    token: Option<String>,
    token_secret: Option<String>,
    private_key_file: Option<String>,
}

impl CredentialValues {
    /// Turn the values into a credential, reading the private key if one is
    /// configured.
    ///
    /// Returns `None` if the values can't sign anything: no consumer key, or
    /// neither a consumer secret nor a private key.
    async fn load(self, ctx: &Context) -> Result<Option<Credential>> {
        let Some(consumer_key) = self.consumer_key.filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if self.consumer_secret.is_none() && self.private_key_file.is_none() {
            debug!("neither consumer secret nor private key configured, skipping");
            return Ok(None);
        }

        let private_key = match &self.private_key_file {
            Some(path) => {
                let path = ctx
                    .expand_home_dir(path)
                    .ok_or_else(|| Error::unexpected("failed to expand home directory"))?;
                debug!("loading private key from {path}");
                let pem = ctx.file_read_as_string(&path).await.map_err(|e| {
                    Error::invalid_key_material(format!("failed to read private key {path}"))
                        .with_source(e)
                })?;
                Some(load_private_key(&pem)?)
            }
            None => None,
        };

        Ok(Some(Credential {
            consumer_key,
            consumer_secret: self.consumer_secret,
            token: self.token,
            token_secret: self.token_secret,
            private_key,
        }))
    }
}
