use jwt_simple::prelude::*;

use crate::prelude::*;

/// Claim set of a JWT bearer assertion
///
/// Specified in [RFC 7523 Section 3: JWT Profile for OAuth 2.0 Client
/// Authentication and Authorization Grants][1]
///
/// [1]: https://tools.ietf.org/html/rfc7523#section-3
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BearerClaims {
    /// 'iss' claim
    pub issuer: String,
    /// 'sub' claim
    pub subject: String,
    /// 'aud' claim. Must equal the token endpoint URL the assertion is sent to
    pub audience: String,
    /// Validity window in seconds. 'exp' is always 'iat' plus this window
    pub lifetime: core::time::Duration,
}

impl BearerClaims {
    /// Default validity window of an assertion (5 minutes)
    pub const DEFAULT_LIFETIME: core::time::Duration = core::time::Duration::from_secs(300);

    /// Claim set with the default 5 minute validity window
    pub fn new(issuer: impl Into<String>, subject: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            subject: subject.into(),
            audience: audience.into(),
            lifetime: Self::DEFAULT_LIFETIME,
        }
    }

    /// Claim set whose audience is the token endpoint itself, the common case
    /// for the JWT bearer grant
    pub fn for_endpoint(issuer: impl Into<String>, subject: impl Into<String>, endpoint: &TokenEndpoint) -> Self {
        Self::new(issuer, subject, endpoint.as_str())
    }

    /// Override the validity window. 'exp' stays 'iat' plus the window
    pub fn with_lifetime(mut self, lifetime: core::time::Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    fn into_jwt_claims(self, issued_at: UnixTimeStamp) -> JWTClaims<NoCustomClaims> {
        let mut claims = Claims::create(Duration::from_secs(self.lifetime.as_secs()));
        claims.issued_at = Some(issued_at);
        claims.expires_at = Some(issued_at + Duration::from_secs(self.lifetime.as_secs()));
        // no 'nbf': the claim set carries exactly iss, sub, aud, iat and exp
        claims.invalid_before = None;
        claims.issuer = Some(self.issuer);
        claims.subject = Some(self.subject);
        claims.audiences = Some(Audiences::AsString(self.audience));
        claims
    }
}

/// A JWT bearer assertion in JWS compact serialization
///
/// Three runs of base64url characters (header, claims, signature) separated by
/// period characters. Header is `{"alg":"RS256","typ":"JWT"}`.
#[derive(Debug, Clone, Eq, PartialEq, derive_more::Deref, derive_more::Display, derive_more::From, derive_more::Into)]
pub struct SignedAssertion(String);

impl SignedAssertion {
    /// The compact serialization itself
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RustyJwtBearer {
    /// Build and sign a bearer assertion with 'iat' set to the current
    /// wall-clock time truncated to whole seconds
    pub fn create_signed_assertion(key: &RsaSigningKey, claims: &BearerClaims) -> RustyBearerResult<SignedAssertion> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| RustyBearerError::CannotDetermineCurrentTime)?;
        Self::create_signed_assertion_at(key, claims, now.as_secs())
    }

    /// Same as [Self::create_signed_assertion] with an explicit 'iat'.
    ///
    /// RS256 (RSASSA-PKCS1-v1_5 with SHA-256) signing involves no randomness,
    /// so the output is byte-identical for a fixed key and a fixed `issued_at`.
    pub fn create_signed_assertion_at(
        key: &RsaSigningKey,
        claims: &BearerClaims,
        issued_at: u64,
    ) -> RustyBearerResult<SignedAssertion> {
        let claims = claims.clone().into_jwt_claims(UnixTimeStamp::from_secs(issued_at));
        let token = key.key_pair().sign(claims).map_err(RustyBearerError::SigningFailed)?;
        Ok(token.into())
    }
}
