use std::path::PathBuf;

use clap::Parser;
use console::style;
use rusty_jwt_bearer::prelude::*;

#[derive(Debug, Parser)]
pub struct RequestToken {
    /// token endpoint URL of the authorization server
    endpoint: String,
    /// path to file with an RSA private key in PKCS#8 PEM format
    #[arg(short = 'k', long)]
    key: PathBuf,
    /// 'iss' claim of the assertion
    #[arg(short = 'i', long)]
    issuer: String,
    /// 'sub' claim of the assertion
    #[arg(short = 's', long)]
    subject: String,
    /// 'aud' claim of the assertion. Defaults to the token endpoint URL
    #[arg(short = 'a', long)]
    audience: Option<String>,
}

impl RequestToken {
    pub fn execute(self) -> anyhow::Result<()> {
        let endpoint = TokenEndpoint::try_from(self.endpoint)?;
        let key = RustyJwtBearer::load_private_key(&self.key)?;
        let claims = match self.audience {
            Some(audience) => BearerClaims::new(self.issuer, self.subject, audience),
            None => BearerClaims::for_endpoint(self.issuer, self.subject, &endpoint),
        };

        let assertion = RustyJwtBearer::create_signed_assertion(&key, &claims)?;
        println!("{}", style("Signed assertion").bold());
        println!("{assertion}\n");

        match RustyJwtBearer::request_token(&assertion, &endpoint) {
            ExchangeOutcome::Completed(response) => Self::print_response(response),
            ExchangeOutcome::TransportFailure { message } => {
                println!("{}", style("Transport failure").bold().red());
                println!("{message}");
            }
        }
        Ok(())
    }

    fn print_response(response: TokenResponse) {
        println!("{}", style("HTTP status").bold());
        println!("{}\n", response.status);
        println!("{}", style("Response body").bold());
        println!("{}\n", response.body);

        let Some(access_token) = response.access_token else {
            println!("the response does not contain an access_token");
            return;
        };
        match RustyJwtBearer::decode_payload(&access_token) {
            Ok(payload) => {
                println!("{}", style("Access token payload (not verified)").bold());
                println!("{payload}");
            }
            Err(e) => println!("the access_token payload cannot be displayed: {e}"),
        }
    }
}
