use tracing::Level;

use crate::{id::IdGenerator, FriendId, Ledger};

/// The avatar service a new friend's image points at unless the user types
/// something else
pub const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48?";

/// The form used to add a friend to the [`Ledger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriend {
    template: String,
    name: String,
    image: String,
}

impl Default for AddFriend {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE)
    }
}

impl AddFriend {
    /// An empty form whose image field starts out as `template`
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        Self {
            name: String::new(),
            image: template.clone(),
            template,
        }
    }

    /// The name typed so far
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The image URL typed so far
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Replace the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the image field
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Return both fields to their initial values
    pub fn reset(&mut self) {
        self.name.clear();
        self.image.clone_from(&self.template);
    }

    /// Add the friend described by the form to the ledger, and reset the
    /// form.
    ///
    /// Returns `None`, and changes nothing, if either field is empty.
    pub fn submit<G: IdGenerator>(&mut self, ledger: &mut Ledger<G>) -> Option<FriendId> {
        if self.name.is_empty() || self.image.is_empty() {
            tracing::event!(Level::DEBUG, "add-friend form incomplete");
            return None;
        }

        let id = ledger.add_friend(self.name.clone(), &self.image);
        self.reset();
        Some(id)
    }
}
