//! auzap-authz - offline permission checks for Auzap console role records

use auzap_authz::cli::{self, Cli};
use auzap_authz::config::Config;
use auzap_authz::utils::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    let mut stdout = std::io::stdout().lock();
    match cli::execute(&args.command, &config, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn load_config(args: &Cli) -> auzap_authz::Result<Config> {
    let mut config = Config::load(args.config.as_deref()).await?;

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json = true;
    }

    config.validate()?;
    Ok(config)
}
