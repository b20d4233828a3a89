use std::path::Path;

use divvy_lib::{
    form::DEFAULT_IMAGE,
    id::{self, IdGenerator},
    initial_friends, ledger, Friend, Ledger,
};
use rusty_money::iso;
use serde::{Deserialize, Serialize};

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    #[error("invalid friends list")]
    Friends(#[from] ledger::Error),
}

/// How new friends are assigned ids
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ids {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// ISO 4217 code of the currency balances are shown in
    pub currency: String,

    /// The image URL the add-friend form starts out with
    pub avatar_template: String,

    /// How new friends get their ids: `uuid` for random UUIDs, or
    /// `sequential` for 1, 2, 3, ... (ids already taken are skipped)
    pub ids: Ids,

    /// The friends the ledger starts out with
    pub friends: Vec<Friend>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            avatar_template: DEFAULT_IMAGE.to_string(),
            ids: Ids::default(),
            friends: initial_friends(),
        }
    }
}

impl Config {
    pub fn currency(&self) -> Result<&'static iso::Currency, Error> {
        iso::find(&self.currency).ok_or_else(|| Error::UnknownCurrency(self.currency.clone()))
    }

    pub fn ledger(&self) -> Result<Ledger<Box<dyn IdGenerator>>, Error> {
        let ids: Box<dyn IdGenerator> = match self.ids {
            Ids::Uuid => Box::new(id::Uuid),
            Ids::Sequential => Box::new(id::Sequential::default()),
        };
        Ok(Ledger::with_friends(self.friends.clone(), ids)?)
    }
}

/// Load the config from `path`, or from the platform config directory if no
/// path is given. A missing file is created with the defaults.
pub fn load(path: Option<&Path>) -> Result<Config, confy::ConfyError> {
    match path {
        Some(path) => confy::load_path(path),
        None => confy::load(BIN_NAME, "config"),
    }
}
