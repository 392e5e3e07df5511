// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use async_trait::async_trait;
use log::debug;
use reqsign_core::{Context, ProvideCredential, Result};

use super::CredentialValues;
use crate::{Config, Credential};

/// EnvCredentialProvider loads OAuth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH_CONSUMER_KEY`: The consumer key
/// - `OAUTH_CONSUMER_SECRET`: The consumer secret
/// - `OAUTH_TOKEN`: The token, optional
/// - `OAUTH_TOKEN_SECRET`: The token secret, optional
/// - `OAUTH_PRIVATE_KEY_FILE`: Path to a PEM encoded RSA private key, optional
///
/// Values set on the [`Config`] passed to [`EnvCredentialProvider::with_config`]
/// take precedence over the environment.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {
    config: Config,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit values from config, the environment fills the rest.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        let cred = CredentialValues {
            consumer_key: config.consumer_key,
            consumer_secret: config.consumer_secret,
            token: config.token,
            token_secret: config.token_secret,
            private_key_file: config.private_key_file,
        }
        .load(ctx)
        .await?;

        if cred.is_some() {
            debug!("loaded credential from environment variables");
        }
        Ok(cred)
    }
}
