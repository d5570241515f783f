use base64::Engine as _;

use crate::prelude::*;

impl RustyJwtBearer {
    /// Decode the payload segment of a compact JWT for display.
    ///
    /// This is a debugging aid: the signature segment is NOT verified and the
    /// returned JSON must never back a trust decision. Use
    /// [RsaSigningKey::public_key] and a verifying call when trust matters.
    pub fn decode_payload(token: &str) -> RustyBearerResult<String> {
        let segments = token.split('.').collect::<Vec<_>>();
        let [_, payload, _] = segments[..] else {
            return Err(RustyBearerError::NotAJwt(segments.len()));
        };
        let payload = base64::prelude::BASE64_URL_SAFE_NO_PAD.decode(payload)?;
        Ok(core::str::from_utf8(&payload)?.to_string())
    }
}
