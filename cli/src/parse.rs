use clap::Parser;
use rusty_jwt_bearer::prelude::*;
use serde_json::Value;

#[derive(Debug, Parser)]
pub struct ParseJwt {
    /// JWT in compact serialization
    jwt: String,
}

impl ParseJwt {
    pub fn execute(self) -> anyhow::Result<()> {
        let payload = RustyJwtBearer::decode_payload(&self.jwt)?;
        match serde_json::from_str::<Value>(&payload) {
            Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
            Err(_) => println!("{payload}"),
        }
        Ok(())
    }
}
