//! The state of the user's balances with their friends

use std::collections::HashSet;

use tracing::{instrument, Level};

use crate::{
    friend::initial_friends,
    id::{self, IdGenerator},
    Friend, FriendId,
};

/// Errors that can occur when constructing a [`Ledger`] from a custom list
/// of friends
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Two friends share an id
    #[error("duplicate friend id: {0}")]
    DuplicateId(FriendId),
}

/// A state transition of the [`Ledger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// See [`Ledger::toggle_add_form`]
    ToggleAddForm,

    /// See [`Ledger::add_friend`]
    AddFriend {
        /// Display name of the new friend
        name: String,

        /// Avatar URL the generated id is appended to
        image_template: String,
    },

    /// See [`Ledger::select_friend`]
    SelectFriend(FriendId),

    /// See [`Ledger::apply_split`]
    ApplySplit {
        /// The friend whose balance changes
        friend: FriendId,

        /// Signed amount added to the balance
        amount: i64,
    },
}

/// The friends list, the current selection, and whether the add-friend form
/// is showing.
///
/// The ledger is only ever changed through its four operations
/// ([`toggle_add_form`](Self::toggle_add_form),
/// [`add_friend`](Self::add_friend), [`select_friend`](Self::select_friend)
/// and [`apply_split`](Self::apply_split)), or equivalently by
/// [`apply`](Self::apply)ing an [`Event`]. None of them fail; a call whose
/// precondition does not hold leaves the ledger as it was.
#[derive(Debug, Clone)]
pub struct Ledger<G = id::Uuid> {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    add_form_open: bool,
    ids: G,
}

impl<G: IdGenerator + Default> Default for Ledger<G> {
    fn default() -> Self {
        Self::seeded(G::default())
    }
}

impl<G: IdGenerator> Ledger<G> {
    /// A ledger holding the [initial friends](initial_friends)
    pub fn seeded(ids: G) -> Self {
        Self {
            friends: initial_friends(),
            selected: None,
            add_form_open: false,
            ids,
        }
    }

    /// A ledger holding the given friends, in order
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if two friends share an id
    pub fn with_friends(friends: Vec<Friend>, ids: G) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for friend in &friends {
            if !seen.insert(&friend.id) {
                return Err(Error::DuplicateId(friend.id.clone()));
            }
        }

        Ok(Self {
            friends,
            selected: None,
            add_form_open: false,
            ids,
        })
    }

    /// The friends, in display order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Look up a friend by id
    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    /// The id of the currently selected friend, if any
    pub fn selected_friend_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    /// The currently selected friend, if any
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.friend(id))
    }

    /// Whether the add-friend form is showing
    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// Show the add-friend form if it is hidden, and hide it if it is showing
    #[instrument(skip(self))]
    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
        tracing::event!(Level::DEBUG, open = self.add_form_open, "toggled add-friend form");
    }

    /// Append a new friend with a zero balance and close the add-friend form.
    ///
    /// The friend's image is the template with the generated id appended as a
    /// query suffix. Callers are expected to reject an empty name or template
    /// beforehand; no validation happens here.
    #[instrument(skip(self))]
    pub fn add_friend(&mut self, name: String, image_template: &str) -> FriendId {
        let id = loop {
            let id = self.ids.next_id();
            if self.friend(&id).is_none() {
                break id;
            }
            tracing::event!(Level::DEBUG, %id, "generated id already taken");
        };

        self.friends.push(Friend {
            image: format!("{}?={}", image_template, id),
            id: id.clone(),
            name,
            balance: 0,
        });
        self.add_form_open = false;

        tracing::event!(Level::INFO, %id, "added friend");
        id
    }

    /// Select the given friend, or clear the selection if they are already
    /// selected. Either way the add-friend form is closed.
    #[instrument(skip(self))]
    pub fn select_friend(&mut self, id: FriendId) {
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        self.add_form_open = false;

        tracing::event!(Level::DEBUG, selected = ?self.selected, "selection changed");
    }

    /// Add `amount` to the friend's balance and clear the selection.
    ///
    /// Does nothing if there is no friend with that id.
    #[instrument(skip(self))]
    pub fn apply_split(&mut self, id: &FriendId, amount: i64) {
        let friend = match self.friends.iter_mut().find(|friend| &friend.id == id) {
            Some(friend) => friend,
            None => {
                tracing::event!(Level::WARN, %id, "no such friend, split ignored");
                return;
            }
        };

        friend.balance = friend.balance.saturating_add(amount);
        tracing::event!(Level::INFO, %id, balance = friend.balance, "applied split");

        self.selected = None;
    }

    /// Apply an [`Event`], returning the resulting ledger
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::ToggleAddForm => self.toggle_add_form(),
            Event::AddFriend {
                name,
                image_template,
            } => {
                self.add_friend(name, &image_template);
            }
            Event::SelectFriend(id) => self.select_friend(id),
            Event::ApplySplit { friend, amount } => self.apply_split(&friend, amount),
        }
        self
    }
}
