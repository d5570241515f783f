use clap::Parser;
use rusty_bearer_cli::*;

fn main() -> anyhow::Result<()> {
    let cli: RustyCli = RustyCli::parse();
    match cli.cmd {
        Commands::RequestToken { delegate } => delegate.execute()?,
        Commands::JwtParse { delegate } => delegate.execute()?,
    };
    Ok(())
}
