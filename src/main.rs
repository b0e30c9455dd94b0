#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use limits_router::{cli, config::Config, error::LimitsError, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Route the limits command; grammar errors exit the way clap does
    match cli::execute_command(&config, &args.argv, &mut std::io::stdout()) {
        Err(err) => match err.downcast::<LimitsError>() {
            Ok(LimitsError::Grammar(e)) => e.exit(),
            Ok(other) => Err(other.into()),
            Err(err) => Err(err),
        },
        ok => ok,
    }
}
