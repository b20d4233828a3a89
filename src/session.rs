//! An interactive session: the ledger plus the forms the user types into

use std::str::FromStr;

use divvy_lib::{
    form::{self, parse_amount, AddFriend, Payer, SplitBill},
    id::IdGenerator,
    FriendId, Ledger,
};
use tracing::{instrument, Level};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Form(#[from] form::Error),
}

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    ToggleAddForm,
    Name(String),
    Image(String),
    AddFriend,
    Select(String),
    Bill(Option<i64>),
    Expense(Option<i64>),
    Payer(Payer),
    Split,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        Ok(match word {
            "" | "list" | "ls" => Self::List,
            "add-form" | "form" => Self::ToggleAddForm,
            "name" => Self::Name(rest.to_string()),
            "image" => Self::Image(rest.to_string()),
            "add" => Self::AddFriend,
            "select" => Self::Select(argument("select")?),
            "bill" => Self::Bill(parse_amount(rest)?),
            "expense" => Self::Expense(parse_amount(rest)?),
            "payer" => Self::Payer(argument("payer")?.parse()?),
            "split" => Self::Split,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        })
    }
}

pub const HELP: &str = "\
commands:
  list                 show your friends
  add-form             open or close the add-friend form
  name <text>          type a name into the add-friend form
  image <url>          type an image URL into the add-friend form
  add                  add the friend described by the form
  select <id|name|n>   select a friend, or deselect them if already selected
  bill <amount>        type the bill total into the split form
  expense <amount>     type the friend's expense into the split form
  payer <you|friend>   choose who paid the bill
  split                split the bill
  help                 show this message
  quit                 leave
";

/// What the front end should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

/// The ledger and the forms that drive it
///
/// The add-friend form keeps its input only while it is open, and a split
/// form lives exactly as long as its friend stays selected.
#[derive(Debug)]
pub struct Session<G> {
    ledger: Ledger<G>,
    add_friend: AddFriend,
    split_bill: Option<SplitBill>,
}

impl<G: IdGenerator> Session<G> {
    pub fn new(ledger: Ledger<G>, avatar_template: &str) -> Self {
        Self {
            ledger,
            add_friend: AddFriend::new(avatar_template),
            split_bill: None,
        }
    }

    pub fn ledger(&self) -> &Ledger<G> {
        &self.ledger
    }

    pub fn add_friend_form(&self) -> &AddFriend {
        &self.add_friend
    }

    pub fn split_bill_form(&self) -> Option<&SplitBill> {
        self.split_bill.as_ref()
    }

    /// Find a friend by id, case-insensitive name, or 1-based position, in
    /// that order
    pub fn resolve(&self, key: &str) -> Option<FriendId> {
        let friends = self.ledger.friends();

        friends
            .iter()
            .find(|friend| friend.id.as_str() == key)
            .or_else(|| {
                friends
                    .iter()
                    .find(|friend| friend.name.eq_ignore_ascii_case(key))
            })
            .or_else(|| {
                key.parse::<usize>()
                    .ok()
                    .filter(|&n| n >= 1)
                    .and_then(|n| friends.get(n - 1))
            })
            .map(|friend| friend.id.clone())
    }

    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Flow, crate::Error> {
        match command {
            Command::List => {}
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
            Command::ToggleAddForm => self.ledger.toggle_add_form(),
            Command::Name(name) => {
                if self.ledger.is_add_form_open() {
                    self.add_friend.set_name(name);
                }
            }
            Command::Image(image) => {
                if self.ledger.is_add_form_open() {
                    self.add_friend.set_image(image);
                }
            }
            Command::AddFriend => {
                if self.ledger.is_add_form_open() {
                    self.add_friend.submit(&mut self.ledger);
                }
            }
            Command::Select(key) => {
                let id = self
                    .resolve(&key)
                    .ok_or(crate::Error::UnknownFriend(key))?;
                self.ledger.select_friend(id);
            }
            Command::Bill(bill) => {
                if let Some(form) = &mut self.split_bill {
                    form.set_bill(bill);
                }
            }
            Command::Expense(expense) => {
                if let Some(form) = &mut self.split_bill {
                    if !form.set_friend_expense(expense) {
                        tracing::event!(Level::INFO, "expense larger than the bill was ignored");
                    }
                }
            }
            Command::Payer(payer) => {
                if let Some(form) = &mut self.split_bill {
                    form.set_payer(payer);
                }
            }
            Command::Split => {
                if let Some(form) = &self.split_bill {
                    form.submit(&mut self.ledger);
                }
            }
        }

        self.sync_forms();
        Ok(Flow::Continue)
    }

    /// Open, keep, or discard forms to match the ledger
    fn sync_forms(&mut self) {
        if !self.ledger.is_add_form_open() {
            self.add_friend.reset();
        }

        let selected = self.ledger.selected_friend_id();
        let current = self.split_bill.as_ref().map(SplitBill::friend);
        if selected != current {
            self.split_bill = selected.cloned().map(SplitBill::new);
        }
    }
}

#[cfg(test)]
mod tests {
    use divvy_lib::id::Sequential;
    use test_case::test_case;

    use super::*;
    use crate::Error;

    fn session() -> Session<Sequential> {
        Session::new(Ledger::default(), form::DEFAULT_IMAGE)
    }

    fn run(session: &mut Session<Sequential>, lines: &[&str]) {
        for line in lines {
            let command = line.parse().unwrap();
            session.handle(command).unwrap();
        }
    }

    fn balances(session: &Session<Sequential>) -> Vec<i64> {
        session
            .ledger()
            .friends()
            .iter()
            .map(|friend| friend.balance)
            .collect()
    }

    #[test_case("list" => Ok(Command::List); "list")]
    #[test_case("" => Ok(Command::List); "empty line")]
    #[test_case("name  Dana Scully " => Ok(Command::Name("Dana Scully".to_string())); "name")]
    #[test_case("select 2" => Ok(Command::Select("2".to_string())); "select")]
    #[test_case("select" => Err(ParseError::MissingArgument("select")); "select without argument")]
    #[test_case("bill 100" => Ok(Command::Bill(Some(100))); "bill")]
    #[test_case("bill" => Ok(Command::Bill(None)); "clear bill")]
    #[test_case("expense x" => Err(ParseError::Form(form::Error::InvalidAmount("x".to_string()))); "bad expense")]
    #[test_case("payer friend" => Ok(Command::Payer(Payer::Friend)); "payer")]
    #[test_case("dance" => Err(ParseError::Unknown("dance".to_string())); "unknown")]
    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test_case("1" => Some("118836".to_string()); "position")]
    #[test_case("933372" => Some("933372".to_string()); "id")]
    #[test_case("anthony" => Some("499476".to_string()); "name")]
    #[test_case("0" => None; "zero")]
    #[test_case("4" => None; "past the end")]
    #[test_case("Dana" => None; "unknown")]
    fn resolve(key: &str) -> Option<String> {
        session().resolve(key).map(|id| id.as_str().to_string())
    }

    #[test]
    fn resolve_prefers_ids_and_names_over_positions() {
        let mut session = session();
        run(
            &mut session,
            &["add-form", "name 3", "add", "add-form", "name Eve", "add"],
        );

        let ids: Vec<&str> = session
            .ledger()
            .friends()
            .iter()
            .map(|friend| friend.id.as_str())
            .collect();
        assert_eq!(ids[3..], ["1", "2"]);

        assert_eq!(session.resolve("1").unwrap().as_str(), "1");
        assert_eq!(session.resolve("2").unwrap().as_str(), "2");
        assert_eq!(session.resolve("3").unwrap().as_str(), "1");
        assert_eq!(session.resolve("4").unwrap().as_str(), "1");
        assert_eq!(session.resolve("5").unwrap().as_str(), "2");

        run(&mut session, &["select 2"]);
        assert_eq!(session.ledger().selected_friend().unwrap().name, "Eve");
    }

    #[test]
    fn split_with_user_paying() {
        let mut session = session();
        run(
            &mut session,
            &["select Clark", "bill 100", "expense 30", "payer you", "split"],
        );

        assert_eq!(balances(&session), vec![63, 20, 0]);
        assert_eq!(session.ledger().selected_friend_id(), None);
        assert!(session.split_bill_form().is_none());
    }

    #[test]
    fn split_with_friend_paying() {
        let mut session = session();
        run(
            &mut session,
            &["select 2", "bill 100", "expense 30", "payer friend", "split"],
        );

        assert_eq!(balances(&session), vec![-7, -10, 0]);
    }

    #[test]
    fn incomplete_split_changes_nothing() {
        let mut session = session();
        run(&mut session, &["select 1", "bill 100", "split"]);

        assert_eq!(balances(&session), vec![-7, 20, 0]);
        assert_eq!(session.split_bill_form().unwrap().bill(), Some(100));
    }

    #[test]
    fn expense_above_bill_is_ignored() {
        let mut session = session();
        run(&mut session, &["select 1", "bill 50", "expense 20", "expense 60"]);

        assert_eq!(session.split_bill_form().unwrap().friend_expense(), Some(20));
    }

    #[test]
    fn new_selection_starts_a_fresh_form() {
        let mut session = session();
        run(&mut session, &["select 1", "bill 50", "select 2"]);

        let form = session.split_bill_form().unwrap();
        assert_eq!(form.friend().as_str(), "933372");
        assert_eq!(form.bill(), None);
    }

    #[test]
    fn add_friend() {
        let mut session = session();
        run(&mut session, &["add-form", "name Dana", "add"]);

        let friends = session.ledger().friends();
        assert_eq!(friends.len(), 4);
        assert_eq!(friends[3].name, "Dana");
        assert_eq!(friends[3].image, "https://i.pravatar.cc/48??=1");
        assert!(!session.ledger().is_add_form_open());
        assert_eq!(session.add_friend_form().name(), "");
    }

    #[test]
    fn add_friend_needs_open_form() {
        let mut session = session();
        run(&mut session, &["name Dana", "add"]);

        assert_eq!(session.ledger().friends().len(), 3);
    }

    #[test]
    fn closing_add_form_discards_input() {
        let mut session = session();
        run(&mut session, &["add-form", "name Dana", "add-form", "add-form"]);

        assert_eq!(session.add_friend_form().name(), "");
    }

    #[test]
    fn selecting_closes_add_form() {
        let mut session = session();
        run(&mut session, &["add-form", "select 3"]);

        assert!(!session.ledger().is_add_form_open());
        assert!(session.split_bill_form().is_some());
    }

    #[test]
    fn unknown_friend() {
        let mut session = session();
        let err = session
            .handle(Command::Select("Dana".to_string()))
            .unwrap_err();

        assert!(matches!(err, Error::UnknownFriend(key) if key == "Dana"));
    }

    #[test_case("help" => Flow::Help; "help")]
    #[test_case("quit" => Flow::Quit; "quit")]
    #[test_case("list" => Flow::Continue; "list")]
    fn flow(line: &str) -> Flow {
        session().handle(line.parse().unwrap()).unwrap()
    }
}
