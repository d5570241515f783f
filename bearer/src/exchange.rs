use serde::Deserialize;

use crate::prelude::*;

/// Grant type of the assertion-based token request
///
/// Specified in [RFC 7523 Section 2.1: Using JWTs as Authorization Grants][1]
///
/// [1]: https://tools.ietf.org/html/rfc7523#section-2.1
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Outcome of one token exchange with the authorization server.
///
/// A completed HTTP exchange is [ExchangeOutcome::Completed] whatever the
/// status code says; deciding whether 400 is a failure is the caller's policy,
/// not this client's. Only faults below HTTP (connection, DNS, timeout, a body
/// which is not JSON) are [ExchangeOutcome::TransportFailure].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExchangeOutcome {
    /// The endpoint answered with a JSON body, with any status code
    Completed(TokenResponse),
    /// The exchange never produced a parseable response
    TransportFailure {
        /// Human readable description of the fault
        message: String,
    },
}

impl ExchangeOutcome {
    /// The issued access token, when the exchange completed and the server
    /// included one
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Completed(response) => response.access_token.as_deref(),
            Self::TransportFailure { .. } => None,
        }
    }
}

/// A completed token endpoint response
///
/// Specified in [RFC 6749 Section 5: The OAuth 2.0 Authorization Framework][1]
///
/// [1]: https://tools.ietf.org/html/rfc6749#section-5
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenResponse {
    /// HTTP status code of the exchange
    pub status: u16,
    /// Raw response body, for display
    pub body: String,
    /// 'access_token' field, when present
    pub access_token: Option<String>,
    /// 'token_type' field, when present
    pub token_type: Option<String>,
    /// 'expires_in' field in seconds, when present
    pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TokenFields {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<u64>,
}

impl RustyJwtBearer {
    /// Present `assertion` to the token endpoint with the JWT bearer grant.
    ///
    /// One blocking POST, no retries, transport-default timeouts. All faults
    /// are captured into the returned [ExchangeOutcome]; this never fails past
    /// its boundary.
    pub fn request_token(assertion: &SignedAssertion, endpoint: &TokenEndpoint) -> ExchangeOutcome {
        match Self::try_request_token(assertion, endpoint) {
            Ok(response) => ExchangeOutcome::Completed(response),
            Err(e) => ExchangeOutcome::TransportFailure { message: e.to_string() },
        }
    }

    fn try_request_token(assertion: &SignedAssertion, endpoint: &TokenEndpoint) -> RustyBearerResult<TokenResponse> {
        let client = reqwest::blocking::Client::builder().build()?;
        // '.form' percent-encodes the assertion; compact JWTs happen to be
        // URL-safe but other assertion formats are not
        let response = client
            .post(endpoint.as_url().clone())
            .form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        let fields = serde_json::from_str::<TokenFields>(&body)?;
        Ok(TokenResponse {
            status,
            body,
            access_token: fields.access_token,
            token_type: fields.token_type,
            expires_in: fields.expires_in,
        })
    }
}
