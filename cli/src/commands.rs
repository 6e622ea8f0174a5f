pub mod session;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "housing")]
#[command(version)]
#[command(about = "Track residents, their utility services and what they owe.")]
pub struct CommandLine {
    /// Print diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Do not print the banner at startup
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
