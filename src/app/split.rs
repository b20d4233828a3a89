use clap::Args;
use divvy_lib::{form::Payer, id::IdGenerator};

use crate::{
    config::Config,
    render::Renderer,
    session::{Command, Session},
    Error,
};

#[derive(Debug, Args)]
pub struct Split {
    /// The friend to split with: their id, name, or position in the list
    #[arg(long, short)]
    friend: String,

    /// The bill total
    #[arg(long, short, allow_hyphen_values = true)]
    bill: i64,

    /// The friend's expense
    #[arg(long, short, allow_hyphen_values = true)]
    expense: i64,

    /// Who paid the bill ('you' or 'friend')
    #[arg(long, short, default_value_t = Payer::User)]
    payer: Payer,
}

impl Split {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let renderer = Renderer::new(config.currency()?);
        let mut session = Session::new(config.ledger()?, &config.avatar_template);

        if !self.apply(&mut session)? {
            println!("nothing to do ...");
        }
        print!("{}", renderer.friends(session.ledger()));

        Ok(())
    }

    /// Feed the split through the session, returning whether the ledger
    /// changed
    fn apply<G: IdGenerator>(self, session: &mut Session<G>) -> Result<bool, Error> {
        let commands = [
            Command::Select(self.friend),
            Command::Bill(Some(self.bill)),
            Command::Expense(Some(self.expense)),
            Command::Payer(self.payer),
            Command::Split,
        ];

        for command in commands {
            session.handle(command)?;
        }

        Ok(session.ledger().selected_friend_id().is_none())
    }
}
