//! Protocol parameters, the signing pipeline and the emitted artifact.
//!
//! - [Making Requests (RFC 5849 3.1)](https://datatracker.ietf.org/doc/html/rfc5849#section-3.1)
//! - [Parameter Transmission (RFC 5849 3.5)](https://datatracker.ietf.org/doc/html/rfc5849#section-3.5)

use http::Method;
use http::Uri;
use log::debug;
use reqsign_core::{Error, Result};
use rsa::RsaPrivateKey;

use crate::base_string::{base_uri, signature_base_string};
use crate::constants::*;
use crate::credential::CredentialContext;
use crate::parameter::{normalize_parameters, percent_encode, Parameter};
use crate::signature::compute_signature;
use crate::{AuthorizationType, ParameterHandling, SignatureMethod, SignatureTreatment};

/// Knobs of one signing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SigningOptions {
    /// Signature algorithm.
    pub signature_method: SignatureMethod,
    /// Header or parameters.
    pub parameter_handling: ParameterHandling,
    /// Escaping of `oauth_signature`.
    pub signature_treatment: SignatureTreatment,
    /// Step of the OAuth flow.
    pub authorization_type: AuthorizationType,
}

/// The request as seen by the signer.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Absolute request uri. Its query string is signed.
    pub uri: Uri,
    /// Parameters that don't live in the uri, e.g. form body fields.
    pub parameters: Vec<Parameter>,
}

impl RequestDescriptor {
    /// Create a descriptor without extra parameters.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            parameters: Vec::new(),
        }
    }

    /// Add an extra parameter.
    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Add every field of an `application/x-www-form-urlencoded` body.
    pub fn with_form_body(mut self, body: &[u8]) -> Self {
        self.parameters.extend(
            form_urlencoded::parse(body)
                .map(|(k, v)| Parameter::body(k.into_owned(), v.into_owned())),
        );
        self
    }

    fn query_parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.uri
            .query()
            .into_iter()
            .flat_map(|q| form_urlencoded::parse(q.as_bytes()))
            .map(|(k, v)| Parameter::query(k.into_owned(), v.into_owned()))
    }
}

/// Result of a successful signing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Value of the `Authorization` header.
    Header(String),
    /// Protocol parameters, including `oauth_signature`, to merge into the
    /// query string or the form body.
    Parameters(Vec<(String, String)>),
}

impl Authorization {
    /// Header value if this is a header.
    pub fn header(&self) -> Option<&str> {
        match self {
            Authorization::Header(v) => Some(v),
            Authorization::Parameters(_) => None,
        }
    }

    /// Parameters if these are parameters.
    pub fn parameters(&self) -> Option<&[(String, String)]> {
        match self {
            Authorization::Header(_) => None,
            Authorization::Parameters(v) => Some(v),
        }
    }
}

/// Collect the protocol parameters for this step of the flow, without
/// `oauth_signature`.
///
/// Returns [`reqsign_core::ErrorKind::MissingCredential`] if a value the step
/// requires is absent.
pub fn protocol_parameters(
    ctx: &CredentialContext,
    method: SignatureMethod,
    authorization_type: AuthorizationType,
) -> Result<Vec<Parameter>> {
    if ctx.consumer_key.is_empty() {
        return Err(Error::missing_credential("consumer key is required"));
    }

    let mut params = vec![
        Parameter::protocol(OAUTH_CONSUMER_KEY, &ctx.consumer_key),
        Parameter::protocol(OAUTH_NONCE, &ctx.nonce),
        Parameter::protocol(OAUTH_SIGNATURE_METHOD, method.as_str()),
        Parameter::protocol(OAUTH_TIMESTAMP, &ctx.timestamp),
        Parameter::protocol(OAUTH_VERSION, OAUTH_VERSION_1_0),
    ];

    match authorization_type {
        AuthorizationType::RequestToken => {
            if let Some(callback) = non_empty(&ctx.callback) {
                params.push(Parameter::protocol(OAUTH_CALLBACK, callback));
            }
        }
        AuthorizationType::AccessToken => {
            let token = non_empty(&ctx.token).ok_or_else(|| {
                Error::missing_credential("request token is required for access token requests")
            })?;
            params.push(Parameter::protocol(OAUTH_TOKEN, token));
            if let Some(verifier) = non_empty(&ctx.verifier) {
                params.push(Parameter::protocol(OAUTH_VERIFIER, verifier));
            }
            if let Some(handle) = non_empty(&ctx.session_handle) {
                params.push(Parameter::protocol(OAUTH_SESSION_HANDLE, handle));
            }
        }
        AuthorizationType::ProtectedResource => {
            // Two legged requests carry no token at all.
            if let Some(token) = non_empty(&ctx.token) {
                params.push(Parameter::protocol(OAUTH_TOKEN, token));
            }
        }
        AuthorizationType::ClientAuthentication => {
            let (Some(username), Some(password)) = (
                non_empty(&ctx.client_username),
                non_empty(&ctx.client_password),
            ) else {
                return Err(Error::missing_credential(
                    "username and password are required for client authentication",
                ));
            };
            params.push(Parameter::protocol(X_AUTH_MODE, X_AUTH_MODE_CLIENT_AUTH));
            params.push(Parameter::protocol(X_AUTH_USERNAME, username));
            params.push(Parameter::protocol(X_AUTH_PASSWORD, password));
        }
    }

    Ok(params)
}

/// Blank values count as absent.
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}

/// Turn a computed signature and the protocol parameters into the artifact
/// attached to the request.
///
/// With [`SignatureTreatment::Escaped`] the signature is percent encoded
/// exactly once; it is never encoded again while rendering the header.
pub fn emit_authorization(
    signature: &str,
    mut params: Vec<Parameter>,
    realm: Option<&str>,
    handling: ParameterHandling,
    treatment: SignatureTreatment,
) -> Authorization {
    let signature = match treatment {
        SignatureTreatment::Escaped => percent_encode(signature),
        SignatureTreatment::Unescaped => signature.to_string(),
    };
    params.push(Parameter::protocol(OAUTH_SIGNATURE, signature));
    params.sort_by(|a, b| {
        (percent_encode(&a.name), percent_encode(&a.value))
            .cmp(&(percent_encode(&b.name), percent_encode(&b.value)))
    });

    match handling {
        ParameterHandling::HttpAuthorizationHeader => {
            let mut s = String::from(AUTHORIZATION_SCHEME);
            s.push(' ');

            let mut fields = Vec::with_capacity(params.len() + 1);
            if let Some(realm) = realm {
                // quoted-string, RFC 7230 3.2.6
                let realm = realm.replace('\\', "\\\\").replace('"', "\\\"");
                fields.push(format!("{REALM}=\"{realm}\""));
            }
            for p in params {
                let value = if p.name == OAUTH_SIGNATURE {
                    p.value
                } else {
                    percent_encode(&p.value)
                };
                fields.push(format!("{}=\"{}\"", percent_encode(&p.name), value));
            }

            s.push_str(&fields.join(", "));
            Authorization::Header(s)
        }
        ParameterHandling::UrlOrPostParameters => {
            Authorization::Parameters(params.into_iter().map(|p| (p.name, p.value)).collect())
        }
    }
}

/// Run the whole pipeline: collect and normalize parameters, build the base
/// string, sign it and emit the artifact.
///
/// This is a pure function of its inputs. Calling it twice with the same
/// context, including nonce and timestamp, yields the same artifact.
pub fn authorize(
    req: &RequestDescriptor,
    ctx: &CredentialContext,
    private_key: Option<&RsaPrivateKey>,
    options: &SigningOptions,
) -> Result<Authorization> {
    let protocol = protocol_parameters(ctx, options.signature_method, options.authorization_type)?;

    let mut signable: Vec<Parameter> = req.query_parameters().collect();
    signable.extend(req.parameters.iter().cloned());
    signable.extend(protocol.iter().cloned());

    let normalized = normalize_parameters(&signable)?;
    let base_string = signature_base_string(&req.method, &base_uri(&req.uri)?, &normalized);
    debug!("signature base string: {base_string}");

    let signature = compute_signature(options.signature_method, &base_string, ctx, private_key)?;

    Ok(emit_authorization(
        &signature,
        protocol,
        ctx.realm.as_deref(),
        options.parameter_handling,
        options.signature_treatment,
    ))
}
