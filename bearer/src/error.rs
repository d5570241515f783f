/// Wrapper over a [Result] with a [RustyBearerError] error
pub type RustyBearerResult<T> = Result<T, RustyBearerError>;

/// All errors which [crate::RustyJwtBearer] might throw
#[derive(Debug, thiserror::Error)]
pub enum RustyBearerError {
    /// Private key file does not exist or cannot be read
    #[error("cannot read the private key file because {0}")]
    KeyNotFound(std::io::Error),
    /// Supplied blob is not a PEM-wrapped PKCS#8 RSA private key
    #[error("invalid private key material because {0}")]
    InvalidKeyFormat(String),
    /// The signing primitive rejected the key or the input
    #[error("signing the assertion failed because {0}")]
    SigningFailed(jwt_simple::Error),
    /// System clock is set before the unix epoch
    #[error("cannot determine the current time")]
    CannotDetermineCurrentTime,
    /// HTTP transport error. Always recovered into
    /// [crate::prelude::ExchangeOutcome::TransportFailure], never propagated to callers
    #[error(transparent)]
    TransportError(#[from] reqwest::Error),
    /// Token is not in JWS compact serialization
    #[error("token is not a JWT: expected 3 dot-separated segments, found {0}")]
    NotAJwt(usize),
    /// Base64 decoding error
    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),
    /// UTF-8 parsing error
    #[error(transparent)]
    Utf8Error(#[from] core::str::Utf8Error),
    /// Json error
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Invalid URL
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
}
