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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol parameters
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_VERIFIER: &str = "oauth_verifier";
pub const OAUTH_SESSION_HANDLE: &str = "oauth_session_handle";
pub const X_AUTH_MODE: &str = "x_auth_mode";
pub const X_AUTH_USERNAME: &str = "x_auth_username";
pub const X_AUTH_PASSWORD: &str = "x_auth_password";
pub const REALM: &str = "realm";

pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const X_AUTH_MODE_CLIENT_AUTH: &str = "client_auth";

pub const AUTHORIZATION_SCHEME: &str = "OAuth";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Env values used in oauth1 signers.
pub const OAUTH_CONSUMER_KEY_ENV: &str = "OAUTH_CONSUMER_KEY";
pub const OAUTH_CONSUMER_SECRET_ENV: &str = "OAUTH_CONSUMER_SECRET";
pub const OAUTH_TOKEN_ENV: &str = "OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET_ENV: &str = "OAUTH_TOKEN_SECRET";
pub const OAUTH_PRIVATE_KEY_FILE_ENV: &str = "OAUTH_PRIVATE_KEY_FILE";
pub const OAUTH_CONFIG_FILE_ENV: &str = "OAUTH_CONFIG_FILE";
pub const OAUTH_PROFILE_ENV: &str = "OAUTH_PROFILE";

/// Default config path for oauth1 credentials.
pub const OAUTH_CONFIG_PATH: &str = "~/.oauth1/config";
/// Default profile name
pub const OAUTH_DEFAULT_PROFILE: &str = "default";

/// AsciiSet for OAuth 1.0a percent encoding.
///
/// Everything but the unreserved characters `A-Z a-z 0-9 - . _ ~` is encoded.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Length of nonces generated by the request signer.
pub const NONCE_LENGTH: usize = 32;
