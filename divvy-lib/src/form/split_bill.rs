use std::{fmt, str::FromStr};

use tracing::{instrument, Level};

use super::Error;
use crate::{id::IdGenerator, FriendId, Ledger};

/// Which party paid the bill
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Payer {
    /// The user paid
    #[default]
    User,

    /// The selected friend paid
    Friend,
}

impl FromStr for Payer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "you" | "user" | "me" => Ok(Self::User),
            "friend" => Ok(Self::Friend),
            _ => Err(Error::UnknownPayer(s.to_string())),
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("you"),
            Self::Friend => f.write_str("friend"),
        }
    }
}

/// The form used to split a bill with the selected friend
///
/// A form belongs to a single friend. Selecting a different friend should
/// start a fresh form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBill {
    friend: FriendId,
    bill: Option<i64>,
    friend_expense: Option<i64>,
    payer: Payer,
}

impl SplitBill {
    /// An empty form for splitting a bill with `friend`
    #[must_use]
    pub fn new(friend: FriendId) -> Self {
        Self {
            friend,
            bill: None,
            friend_expense: None,
            payer: Payer::default(),
        }
    }

    /// The friend this form splits a bill with
    #[must_use]
    pub fn friend(&self) -> &FriendId {
        &self.friend
    }

    /// The total amount of the bill
    #[must_use]
    pub fn bill(&self) -> Option<i64> {
        self.bill
    }

    /// The friend's share of the bill
    #[must_use]
    pub fn friend_expense(&self) -> Option<i64> {
        self.friend_expense
    }

    /// Who paid the bill
    #[must_use]
    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Replace the bill total
    ///
    /// The friend's expense is not re-checked against the new total.
    pub fn set_bill(&mut self, bill: Option<i64>) {
        self.bill = bill;
    }

    /// Replace the friend's expense, unless it is larger than the bill.
    ///
    /// An expense larger than the current bill (an empty bill counting as
    /// zero) is discarded and the previous value kept. Returns whether the
    /// value was accepted.
    pub fn set_friend_expense(&mut self, expense: Option<i64>) -> bool {
        if let Some(expense) = expense {
            if expense > self.bill.unwrap_or_default() {
                tracing::event!(Level::DEBUG, expense, bill = ?self.bill, "expense exceeds bill");
                return false;
            }
        }

        self.friend_expense = expense;
        true
    }

    /// Set who paid the bill
    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// The friend's share of the bill: whatever the expense leaves over.
    /// Empty until a bill is entered, or if the difference does not fit in
    /// an `i64`.
    #[must_use]
    pub fn friend_share(&self) -> Option<i64> {
        self.bill?
            .checked_sub(self.friend_expense.unwrap_or_default())
    }

    /// The amount the friend's balance changes by if the form is submitted.
    ///
    /// If the user paid, the friend now owes their share; if the friend
    /// paid, the user owes the expense. Returns `None` while either the bill
    /// or the expense is empty or zero, or if the amount overflows.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        let bill = self.bill.filter(|&bill| bill != 0)?;
        let friend_expense = self.friend_expense.filter(|&expense| expense != 0)?;

        match self.payer {
            Payer::User => bill.checked_sub(friend_expense),
            Payer::Friend => friend_expense.checked_neg(),
        }
    }

    /// Apply the split to the ledger
    ///
    /// Returns the amount applied, or `None` if the form was rejected, in
    /// which case the ledger is unchanged.
    #[instrument(skip(ledger))]
    pub fn submit<G: IdGenerator>(&self, ledger: &mut Ledger<G>) -> Option<i64> {
        let amount = self.amount();
        match amount {
            Some(amount) => ledger.apply_split(&self.friend, amount),
            None => tracing::event!(Level::DEBUG, "split-bill form rejected"),
        }
        amount
    }
}
