//! Fixtures and helpers shared by the test suite

use jwt_simple::prelude::*;

use crate::prelude::*;

/// 2048-bit PKCS#8 RSA key shared by the test suite
pub const RSA_TEST_KEY_PEM: &str = include_str!("../tests/data/rsa2048.pem");

/// [RSA_TEST_KEY_PEM] parsed into a signing key
pub fn test_key() -> RsaSigningKey {
    RsaSigningKey::try_from(&Pem::from(RSA_TEST_KEY_PEM)).unwrap()
}

/// The claim set used across the suite
pub fn sample_claims() -> BearerClaims {
    BearerClaims::new("svc-a", "svc-a", "https://auth.example.com/oauth2/token")
}

/// [sample_claims] signed with [test_key] at a fixed 'iat'
pub fn sample_assertion(issued_at: u64) -> SignedAssertion {
    RustyJwtBearer::create_signed_assertion_at(&test_key(), &sample_claims(), issued_at).unwrap()
}

/// Decoded header segment of a compact JWT
pub fn jwt_header(token: &str) -> serde_json::Map<String, serde_json::Value> {
    jwt_part(token, 0)
}

/// Decoded payload segment of a compact JWT
pub fn jwt_claims(token: &str) -> serde_json::Map<String, serde_json::Value> {
    jwt_part(token, 1)
}

fn jwt_part(token: &str, part: usize) -> serde_json::Map<String, serde_json::Value> {
    use base64::Engine as _;

    let parts = token.split('.').collect::<Vec<_>>();
    let part = base64::prelude::BASE64_URL_SAFE_NO_PAD.decode(parts[part]).unwrap();
    let part = serde_json::from_slice::<serde_json::Value>(&part).unwrap();
    part.as_object().unwrap().to_owned()
}

/// Verify a token against `pk` as if "now" were `at` seconds since epoch
pub fn verify_at(pk: &RS256PublicKey, token: &str, at: u64) -> Result<JWTClaims<NoCustomClaims>, jwt_simple::Error> {
    let options = VerificationOptions {
        artificial_time: Some(UnixTimeStamp::from_secs(at)),
        ..Default::default()
    };
    pk.verify_token::<NoCustomClaims>(token, Some(options))
}

/// Corrupt the signature segment while keeping it valid base64url
pub fn flip_last_signature_char(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut signature = signature.to_string();
    let last = signature.pop().unwrap();
    signature.push(if last == 'A' { 'B' } else { 'A' });
    format!("{head}.{signature}")
}
