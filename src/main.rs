#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]

mod app;
use confy::ConfyError;
mod config;
mod logging;
mod render;
mod session;

use app::App;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config")]
    Load(#[from] ConfyError),

    #[error("invalid config")]
    Config(#[from] config::Error),

    #[error("failed to set up logging")]
    Logging(#[from] tracing_subscriber::filter::ParseError),

    #[error("no friend matching '{0}'")]
    UnknownFriend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> anyhow::Result<()> {
    let app = App::from_cli();
    app.run()?;
    Ok(())
}
