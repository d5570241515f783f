use std::fmt::{Display, Formatter};

use crate::prelude::*;

/// URL of the authorization server's token endpoint
///
/// Specified in [RFC 6749 Section 3.2: The OAuth 2.0 Authorization Framework][1]
///
/// [1]: https://tools.ietf.org/html/rfc6749#section-3.2
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenEndpoint(url::Url);

impl TokenEndpoint {
    /// The parsed URL
    pub fn as_url(&self) -> &url::Url {
        &self.0
    }

    /// The exact string form used as the `aud` claim of an assertion
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for TokenEndpoint {
    type Error = RustyBearerError;

    fn try_from(u: &str) -> RustyBearerResult<Self> {
        Ok(Self(url::Url::try_from(u)?))
    }
}

impl TryFrom<String> for TokenEndpoint {
    type Error = RustyBearerError;

    fn try_from(u: String) -> RustyBearerResult<Self> {
        u.as_str().try_into()
    }
}

impl From<url::Url> for TokenEndpoint {
    fn from(u: url::Url) -> Self {
        Self(u)
    }
}

impl Display for TokenEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
