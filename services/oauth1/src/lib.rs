//! OAuth 1.0a request signing for reqsign.
//!
//! This crate signs HTTP requests with OAuth 1.0a as described in
//! [RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849), using
//! HMAC-SHA1, RSA-SHA1 or PLAINTEXT.
//!
//! ## Overview
//!
//! Signing a request runs through a fixed pipeline:
//!
//! 1. collect query, form body and protocol parameters ([`Parameter`])
//! 2. normalize them ([`normalize_parameters`])
//! 3. build the signature base string ([`base_uri`], [`signature_base_string`])
//! 4. sign it ([`compute_signature`])
//! 5. emit an `Authorization` header or parameters ([`Authorization`])
//!
//! [`authorize`] runs the whole pipeline as a pure function of a
//! [`CredentialContext`]. [`RequestSigner`] wires it into
//! `http::request::Parts` and draws a fresh nonce and timestamp per request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reqsign_core::{Context, OsEnv, OsFileRead, Result, Signer};
//! use reqsign_oauth1::{Config, DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
//!
//!     // Explicit values win, OAUTH_* env vars and ~/.oauth1/config fill the rest.
//!     let config = Config::new().with_consumer_key("dpf43f3p2l4k3l03");
//!     let loader = DefaultCredentialProvider::new(config);
//!     let builder = RequestSigner::new().with_realm("Photos");
//!
//!     let signer = Signer::new(ctx, loader, builder);
//!
//!     let (mut parts, _) = http::Request::get("https://photos.example.net/photos?size=original")
//!         .body(())?
//!         .into_parts();
//!     signer.sign(&mut parts).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export OAUTH_CONSUMER_KEY=your-consumer-key
//! export OAUTH_CONSUMER_SECRET=your-consumer-secret
//! export OAUTH_TOKEN=your-token                       # Optional
//! export OAUTH_TOKEN_SECRET=your-token-secret         # Optional
//! export OAUTH_PRIVATE_KEY_FILE=~/.oauth1/key.pem     # Optional, for RSA-SHA1
//! ```
//!
//! ### Configuration File
//!
//! An ini file at `~/.oauth1/config` (or `OAUTH_CONFIG_FILE`), one section per
//! profile (`OAUTH_PROFILE`, `default` if unset). See
//! [`ConfigFileCredentialProvider`].

mod constants;

mod types;
pub use types::AuthorizationType;
pub use types::ParameterHandling;
pub use types::SignatureTreatment;

mod signature_method;
pub use signature_method::SignatureMethod;

mod parameter;
pub use parameter::normalize_parameters;
pub use parameter::percent_encode;
pub use parameter::Parameter;
pub use parameter::ParameterSource;

mod base_string;
pub use base_string::base_uri;
pub use base_string::signature_base_string;

mod signature;
pub use signature::compute_signature;
pub use signature::load_private_key;

mod credential;
pub use credential::Credential;
pub use credential::CredentialContext;

mod authorization;
pub use authorization::authorize;
pub use authorization::emit_authorization;
pub use authorization::protocol_parameters;
pub use authorization::Authorization;
pub use authorization::RequestDescriptor;
pub use authorization::SigningOptions;

mod config;
pub use config::Config;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;
