use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "turnir")]
#[command(author, version, about = "Telegram bot for CS2 tournament team registration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
