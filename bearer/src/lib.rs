//! Client side of the OAuth 2.0 JWT bearer token grant.
//!
//! Specified in [RFC 7523: JSON Web Token (JWT) Profile for OAuth 2.0 Client
//! Authentication and Authorization Grants][1]: a self-signed RS256 assertion
//! is built from a PKCS#8 RSA private key and an issuer/subject/audience claim
//! set, then exchanged at the authorization server's token endpoint for an
//! access token.
//!
//! [1]: https://tools.ietf.org/html/rfc7523
#![deny(missing_docs)]

mod assertion;
mod error;
mod exchange;
mod inspect;
mod key;
mod model;

#[cfg(test)]
pub mod test_utils;

/// Prelude
pub mod prelude {
    pub use super::RustyJwtBearer;
    use super::*;
    pub use assertion::{BearerClaims, SignedAssertion};
    pub use error::{RustyBearerError, RustyBearerResult};
    pub use exchange::{ExchangeOutcome, JWT_BEARER_GRANT_TYPE, TokenResponse};
    pub use key::RsaSigningKey;
    pub use model::endpoint::TokenEndpoint;
    pub use model::pem::Pem;
}

/// Entry point for the whole grant: load a key, sign an assertion, exchange it
/// for an access token, decode the result for display
pub struct RustyJwtBearer;
