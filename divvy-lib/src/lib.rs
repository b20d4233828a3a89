//! A library for keeping track of who owes whom after splitting bills with
//! friends

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod friend;
pub use friend::{initial_friends, Friend, FriendId, Standing};
pub mod form;
pub mod id;
pub mod ledger;
#[doc(inline)]
pub use ledger::{Event, Ledger};
