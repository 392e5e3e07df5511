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

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use log::debug;
use percent_encoding::percent_decode_str;
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqsign_core::time::{format_unix_timestamp, now, DateTime};
use reqsign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::authorization::{authorize, Authorization, RequestDescriptor, SigningOptions};
use crate::constants::*;
use crate::credential::{Credential, CredentialContext};
use crate::parameter::Parameter;
use crate::{AuthorizationType, ParameterHandling, SignatureMethod, SignatureTreatment};

/// RequestSigner that implements OAuth 1.0a request signing.
///
/// Every call draws a fresh nonce and timestamp. Query parameters are always
/// signed, form body fields only through [`RequestSigner::sign_form_request`].
///
/// With [`ParameterHandling::UrlOrPostParameters`] the protocol parameters
/// are appended to the query string. The query string is form encoded on
/// the way out, so `oauth_signature` is encoded exactly once on the wire
/// whatever the [`SignatureTreatment`]. In header mode the uri is left
/// untouched.
///
/// - [RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849)
#[derive(Debug, Default)]
pub struct RequestSigner {
    options: SigningOptions,
    realm: Option<String>,
    callback: Option<String>,
    verifier: Option<String>,
    session_handle: Option<String>,
    client_credentials: Option<(String, String)>,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a signer using HMAC-SHA1 and the Authorization header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signature method.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.options.signature_method = method;
        self
    }

    /// Set where the protocol parameters go.
    pub fn with_parameter_handling(mut self, handling: ParameterHandling) -> Self {
        self.options.parameter_handling = handling;
        self
    }

    /// Set whether the signature is percent encoded.
    pub fn with_signature_treatment(mut self, treatment: SignatureTreatment) -> Self {
        self.options.signature_treatment = treatment;
        self
    }

    /// Set the step of the flow requests belong to.
    pub fn with_authorization_type(mut self, authorization_type: AuthorizationType) -> Self {
        self.options.authorization_type = authorization_type;
        self
    }

    /// Set the realm rendered into the Authorization header.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set the callback sent with request token requests.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Set the verifier sent with access token requests.
    pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
        self.verifier = Some(verifier.into());
        self
    }

    /// Set the session handle sent with access token requests.
    pub fn with_session_handle(mut self, handle: impl Into<String>) -> Self {
        self.session_handle = Some(handle.into());
        self
    }

    /// Set the xAuth username and password.
    pub fn with_client_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.client_credentials = Some((username.into(), password.into()));
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Reusing a nonce gets requests rejected as replays.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sign a request with an `application/x-www-form-urlencoded` body.
    ///
    /// The body fields are signed as well. The body itself is left untouched,
    /// in parameter mode the protocol parameters still go to the query string.
    pub async fn sign_form_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Credential>,
    ) -> Result<()> {
        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        if !content_type.starts_with(FORM_URLENCODED) {
            return Err(Error::request_invalid(format!(
                "only {FORM_URLENCODED} bodies can be signed, got {content_type:?}"
            )));
        }

        let body_params = form_urlencoded::parse(body)
            .map(|(k, v)| Parameter::body(k.into_owned(), v.into_owned()))
            .collect();
        self.sign_parts(parts, body_params, credential)
    }

    fn sign_parts(
        &self,
        parts: &mut http::request::Parts,
        body_params: Vec<Parameter>,
        credential: Option<&Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::missing_credential("missing credential"))?;

        let mut desc = RequestDescriptor::new(parts.method.clone(), parts.uri.clone());
        desc.parameters = body_params;

        // Sign before touching the request, a failure leaves it as it was.
        let ctx = self.credential_context(cred);
        let authorization = authorize(&desc, &ctx, cred.private_key.as_ref(), &self.options)?;

        match authorization {
            Authorization::Header(value) => {
                let mut value = HeaderValue::from_str(&value)?;
                value.set_sensitive(true);
                parts.headers.insert(AUTHORIZATION, value);
                Ok(())
            }
            Authorization::Parameters(params) => {
                let mut req = SigningRequest::build(parts)?;
                for (k, v) in params {
                    // The query is form encoded on apply, push the raw signature.
                    let v = if k == OAUTH_SIGNATURE
                        && self.options.signature_treatment == SignatureTreatment::Escaped
                    {
                        percent_decode_str(&v)
                            .decode_utf8()
                            .map_err(|e| {
                                Error::unexpected("signature is not valid utf-8").with_source(e)
                            })?
                            .into_owned()
                    } else {
                        v
                    };
                    req.query_push(k, v);
                }
                req.apply(parts)
            }
        }
    }

    fn credential_context(&self, cred: &Credential) -> CredentialContext {
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);
        let timestamp = format_unix_timestamp(self.time.unwrap_or_else(now));
        debug!("signing request with nonce {nonce} at {timestamp}");

        let mut ctx = CredentialContext::from_credential(cred, nonce, timestamp);
        ctx.realm = self.realm.clone();
        ctx.callback = self.callback.clone();
        ctx.verifier = self.verifier.clone();
        ctx.session_handle = self.session_handle.clone();
        if let Some((username, password)) = &self.client_credentials {
            ctx = ctx.with_client_credentials(username, password);
        }
        ctx
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        self.sign_parts(parts, Vec::new(), credential)
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}
