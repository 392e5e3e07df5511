/// Where the protocol parameters end up once a request is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterHandling {
    /// Render an `Authorization: OAuth ...` header.
    #[default]
    HttpAuthorizationHeader,
    /// Hand the parameters back to be merged into the query string or form body.
    UrlOrPostParameters,
}

/// Whether `oauth_signature` is percent encoded before it is emitted.
///
/// Providers disagree here: most expect the header to carry an escaped
/// signature, some want it raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureTreatment {
    /// Percent encode the signature once.
    #[default]
    Escaped,
    /// Emit the base64 signature as is.
    Unescaped,
}

/// Step of the OAuth 1.0a flow a request belongs to.
///
/// This only decides which protocol parameters are mandatory or allowed; the
/// signing math is the same for every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationType {
    /// Temporary credential request. Sends `oauth_callback`, never `oauth_token`.
    RequestToken,
    /// Token exchange. Requires the request token, sends `oauth_verifier`.
    AccessToken,
    /// Access to a protected resource. Sends the access token if there is one;
    /// without one the request is signed by the consumer alone.
    #[default]
    ProtectedResource,
    /// xAuth: exchange a username and password for an access token.
    ClientAuthentication,
}
