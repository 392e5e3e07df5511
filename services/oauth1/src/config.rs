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

use std::fmt::{Debug, Formatter};

use reqsign_core::utils::Redact;
use reqsign_core::Context;

use crate::constants::*;

/// Config for OAuth 1.0a credentials.
///
/// Every field can also come from the environment, see [`Config::from_env`].
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_KEY_ENV`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_SECRET_ENV`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN_ENV`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN_SECRET_ENV`]
    pub token_secret: Option<String>,
    /// Path to a PEM encoded RSA private key, used by RSA-SHA1.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_PRIVATE_KEY_FILE_ENV`]
    pub private_key_file: Option<String>,
    /// Path to the ini config file. Defaults to [`OAUTH_CONFIG_PATH`].
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONFIG_FILE_ENV`]
    pub config_file: Option<String>,
    /// Section of the config file. Defaults to [`OAUTH_DEFAULT_PROFILE`].
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_PROFILE_ENV`]
    pub profile: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set private_key_file
    pub fn with_private_key_file(mut self, path: impl Into<String>) -> Self {
        self.private_key_file = Some(path.into());
        self
    }

    /// Set config_file
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept, empty env values are ignored.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH_CONSUMER_KEY_ENV).filter(|v| !v.is_empty()) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_CONSUMER_SECRET_ENV).filter(|v| !v.is_empty()) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_TOKEN_SECRET_ENV).filter(|v| !v.is_empty()) {
            self.token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_PRIVATE_KEY_FILE_ENV).filter(|v| !v.is_empty()) {
            self.private_key_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_CONFIG_FILE_ENV).filter(|v| !v.is_empty()) {
            self.config_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_PROFILE_ENV).filter(|v| !v.is_empty()) {
            self.profile.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("private_key_file", &self.private_key_file)
            .field("config_file", &self.config_file)
            .field("profile", &self.profile)
            .finish()
    }
}
