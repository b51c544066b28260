use std::process::ExitCode;

use clap::Parser;
use token_deploy_scripts::{
    cli::Cli,
    commands::{exit_code, run},
    config::load_dotenv,
    utils::setup_logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    load_dotenv();
    let (config, params) = Cli::parse().into_parts();

    let outcome = run(config, params).await;
    ExitCode::from(exit_code(&outcome))
}
