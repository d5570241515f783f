use rusty_jwt_bearer::prelude::*;
use wiremock::MockServer;

const RSA_TEST_KEY_PEM: &str = include_str!("../data/rsa2048.pem");

/// The blocking exchange client cannot run inside an async context, so the
/// mock server lives on its own runtime while assertions happen on the test
/// thread
pub fn mock_server() -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

pub fn endpoint(server: &MockServer) -> TokenEndpoint {
    TokenEndpoint::try_from(format!("{}/oauth2/token", server.uri())).unwrap()
}

pub fn signed_assertion() -> SignedAssertion {
    let key = RsaSigningKey::try_from(&Pem::from(RSA_TEST_KEY_PEM)).unwrap();
    let claims = BearerClaims::new("svc-a", "svc-a", "https://auth.example.com/oauth2/token");
    RustyJwtBearer::create_signed_assertion(&key, &claims).unwrap()
}
