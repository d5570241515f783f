use clap::{Parser, Subcommand};

mod parse;
mod request;

pub use parse::ParseJwt;
pub use request::RequestToken;

#[derive(Debug, Parser)]
#[command(name = "rusty-bearer", about = "Request OAuth 2.0 access tokens with the JWT bearer grant")]
pub struct RustyCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign a bearer assertion and exchange it for an access token
    RequestToken {
        #[command(flatten)]
        delegate: RequestToken,
    },
    /// Decode the payload of a compact JWT without verifying it
    JwtParse {
        #[command(flatten)]
        delegate: ParseJwt,
    },
}
