pub mod check;
pub mod clear;
pub mod init;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Check the release feed for a newer version")]
    Check,
    #[command(about = "Show whether an update is pending")]
    Status,
    #[command(about = "Reset the persisted update flag")]
    Clear,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Check => check::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Clear => clear::cmd(),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
