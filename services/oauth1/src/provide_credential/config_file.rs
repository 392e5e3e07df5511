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
use reqsign_core::{Context, Error, ProvideCredential, Result};

use super::CredentialValues;
use crate::constants::*;
use crate::Credential;

/// ConfigFileCredentialProvider loads credentials from an ini config file (`~/.oauth1/config`).
///
/// ```ini
/// [default]
/// consumer_key = dpf43f3p2l4k3l03
/// consumer_secret = kd94hf93k423kf44
/// token = nnch734d00sl2jdk
/// token_secret = pfkkdhi9sl3r4s00
/// private_key_file = ~/.oauth1/key.pem
/// ```
///
/// The config file path and profile name can be overridden with
/// [`ConfigFileCredentialProvider::with_config_file`] and
/// [`ConfigFileCredentialProvider::with_profile`], or with environment variables:
/// - `OAUTH_CONFIG_FILE`: Override the config file path
/// - `OAUTH_PROFILE`: Override the profile name (default is "default")
#[derive(Debug, Default, Clone)]
pub struct ConfigFileCredentialProvider {
    config_file: Option<String>,
    profile: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a new ConfigFileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of the default one.
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Read this section instead of the default one.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config_file = self
            .config_file
            .clone()
            .or_else(|| ctx.env_var(OAUTH_CONFIG_FILE_ENV))
            .unwrap_or_else(|| OAUTH_CONFIG_PATH.to_string());
        let profile = self
            .profile
            .clone()
            .or_else(|| ctx.env_var(OAUTH_PROFILE_ENV))
            .unwrap_or_else(|| OAUTH_DEFAULT_PROFILE.to_string());

        let expanded_path = ctx
            .expand_home_dir(&config_file)
            .ok_or_else(|| Error::unexpected("failed to expand home directory"))?;

        // A missing file just means this source has nothing to offer.
        let content = match ctx.file_read_as_string(&expanded_path).await {
            Ok(content) => content,
            Err(_) => {
                debug!("oauth1 config file not found at {expanded_path:?}");
                return Ok(None);
            }
        };

        let ini = ini::Ini::read_from(&mut content.as_bytes()).map_err(|e| {
            Error::config_invalid(format!("failed to parse config file {expanded_path}"))
                .with_source(e)
        })?;
        let Some(section) = ini.section(Some(profile.as_str())) else {
            debug!("profile {profile} not found in config file");
            return Ok(None);
        };

        let get = |key: &str| section.get(key).map(|v| v.to_string());
        let cred = CredentialValues {
            consumer_key: get("consumer_key"),
            consumer_secret: get("consumer_secret"),
            token: get("token"),
            token_secret: get("token_secret"),
            private_key_file: get("private_key_file"),
        }
        .load(ctx)
        .await?;

        match &cred {
            Some(_) => debug!("loaded credential from config file profile {profile}"),
            None => debug!("incomplete config in file, skipping"),
        }
        Ok(cred)
    }
}
