//! Strategies for generating [`FriendId`]s

use std::fmt::Debug;

use crate::FriendId;

/// A source of fresh [`FriendId`]s
///
/// Implementations should not repeat an id for the lifetime of the process.
/// The [`Ledger`](crate::Ledger) skips any id that is already taken, so a
/// generator is not required to know about ids it did not produce.
pub trait IdGenerator: Debug {
    /// Produce the next id
    fn next_id(&mut self) -> FriendId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> FriendId {
        (**self).next_id()
    }
}

/// Random (version 4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct Uuid;

impl IdGenerator for Uuid {
    fn next_id(&mut self) -> FriendId {
        uuid::Uuid::new_v4().to_string().into()
    }
}

/// A monotonically increasing counter
#[derive(Debug, Clone, Copy)]
pub struct Sequential {
    next: u64,
}

impl Sequential {
    /// Create a counter whose first id is `first`
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for Sequential {
    fn next_id(&mut self) -> FriendId {
        let id = self.next;
        self.next += 1;
        id.into()
    }
}
