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

use reqsign_core::{utils::Redact, SigningCredential};
use rsa::RsaPrivateKey;

/// Long lived OAuth 1.0a credential.
///
/// Consumer credentials identify the application, the token pair identifies
/// the authorized user. Both are obtained out of band.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret. Required for HMAC-SHA1 and PLAINTEXT.
    pub consumer_secret: Option<String>,
    /// Token, sent as `oauth_token`.
    pub token: Option<String>,
    /// Token secret.
    pub token_secret: Option<String>,
    /// Private key. Required for RSA-SHA1.
    pub private_key: Option<RsaPrivateKey>,
}

impl Credential {
    /// Create a new credential from consumer key and secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: Some(consumer_secret.to_string()),
            ..Default::default()
        }
    }

    /// Set the token pair.
    pub fn with_token(mut self, token: &str, token_secret: &str) -> Self {
        self.token = Some(token.to_string());
        self.token_secret = Some(token_secret.to_string());
        self
    }

    /// Set the RSA private key.
    pub fn with_private_key(mut self, key: RsaPrivateKey) -> Self {
        self.private_key = Some(key);
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty()
            && (self.consumer_secret.is_some() || self.private_key.is_some())
    }
}

/// Everything a single signing operation needs to know about the caller.
///
/// Built fresh for every outgoing request: the nonce and timestamp must never
/// be reused, or the provider may reject the request as a replay. Nothing in
/// the signing pipeline mutates it.
#[derive(Clone, Default)]
pub struct CredentialContext {
    /// Consumer key.
    pub consumer_key: String,
    /// Consumer secret.
    pub consumer_secret: Option<String>,
    /// Token.
    pub token: Option<String>,
    /// Token secret.
    pub token_secret: Option<String>,
    /// Single use random string.
    pub nonce: String,
    /// Seconds since the unix epoch.
    pub timestamp: String,
    /// Callback url, sent with request token requests. `oob` for out of band.
    pub callback: Option<String>,
    /// Verifier returned by the provider after the user authorized the request token.
    pub verifier: Option<String>,
    /// Realm, only rendered into the Authorization header.
    pub realm: Option<String>,
    /// Session handle for providers that support refreshing access tokens.
    pub session_handle: Option<String>,
    /// xAuth username.
    pub client_username: Option<String>,
    /// xAuth password.
    pub client_password: Option<String>,
}

impl CredentialContext {
    /// Create a context for one request.
    pub fn new(
        consumer_key: impl Into<String>,
        nonce: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            nonce: nonce.into(),
            timestamp: timestamp.into(),
            ..Default::default()
        }
    }

    /// Create a context for one request from a long lived credential.
    pub fn from_credential(
        cred: &Credential,
        nonce: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: cred.consumer_key.clone(),
            consumer_secret: cred.consumer_secret.clone(),
            token: cred.token.clone(),
            token_secret: cred.token_secret.clone(),
            nonce: nonce.into(),
            timestamp: timestamp.into(),
            ..Default::default()
        }
    }

    /// Set consumer secret.
    pub fn with_consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(secret.into());
        self
    }

    /// Set token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token secret.
    pub fn with_token_secret(mut self, secret: impl Into<String>) -> Self {
        self.token_secret = Some(secret.into());
        self
    }

    /// Set callback.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Set verifier.
    pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
        self.verifier = Some(verifier.into());
        self
    }

    /// Set realm.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set session handle.
    pub fn with_session_handle(mut self, handle: impl Into<String>) -> Self {
        self.session_handle = Some(handle.into());
        self
    }

    /// Set xAuth username and password.
    pub fn with_client_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.client_username = Some(username.into());
        self.client_password = Some(password.into());
        self
    }
}

impl Debug for CredentialContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialContext")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("nonce", &self.nonce)
            .field("timestamp", &self.timestamp)
            .field("callback", &self.callback)
            .field("verifier", &Redact::from(&self.verifier))
            .field("realm", &self.realm)
            .field("session_handle", &Redact::from(&self.session_handle))
            .field("client_username", &self.client_username)
            .field("client_password", &Redact::from(&self.client_password))
            .finish()
    }
}
