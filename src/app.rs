use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::{config, logging, Error};

mod shell;
mod show;
mod split;

use shell::Shell;
use show::Show;
use split::Split;

/// Keep track of who owes whom after splitting bills with friends
#[derive(Debug, Parser)]
#[command(name = "divvy", version)]
pub struct App {
    /// Log more (repeat for even more)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Read the config from this file instead of the platform config directory
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split bills interactively (the default)
    Shell,

    /// Split a single bill with one friend and print the result
    Split(Split),

    /// Print the loaded config
    Show,
}

impl App {
    pub fn from_cli() -> Self {
        Self::parse()
    }

    pub fn run(self) -> Result<(), Error> {
        logging::set_up(self.verbose)?;
        let config = config::load(self.config.as_deref())?;
        tracing::debug!(?config, "loaded config");

        match self.command.unwrap_or(Command::Shell) {
            Command::Shell => Shell.run(&config),
            Command::Split(split) => split.run(&config),
            Command::Show => {
                Show.run(&config);
                Ok(())
            }
        }
    }
}
