//! The input forms that feed the [`Ledger`](crate::Ledger)
//!
//! Forms hold transient, unvalidated user input. They decide whether a
//! submission goes ahead and translate it into a ledger operation; a rejected
//! submission leaves the ledger untouched.

mod add_friend;
pub use add_friend::{AddFriend, DEFAULT_IMAGE};
mod split_bill;
pub use split_bill::{Payer, SplitBill};

/// Errors that can occur when parsing form input
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input is not a whole number
    #[error("'{0}' is not a whole amount")]
    InvalidAmount(String),

    /// The input does not name either party of a bill
    #[error("unknown payer '{0}', expected 'you' or 'friend'")]
    UnknownPayer(String),
}

/// Parse an amount typed into a form field
///
/// Surrounding whitespace is ignored, and a blank field has no value.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] if the input is not a whole number
pub fn parse_amount(input: &str) -> Result<Option<i64>, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidAmount(input.to_string()))
}
