use std::fmt;

use serde::{Deserialize, Serialize};

/// The opaque identifier of a [`Friend`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FriendId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for FriendId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A friend whose running balance with the user is tracked by the
/// [`Ledger`](crate::Ledger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Friend {
    /// Unique within a ledger
    pub id: FriendId,

    /// Display name
    pub name: String,

    /// Avatar URL
    pub image: String,

    /// Whole currency units. Positive when the friend owes the user, negative
    /// when the user owes the friend.
    pub balance: i64,
}

impl Friend {
    /// Classify the balance for display
    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing::from(self.balance)
    }
}

/// Who owes whom, and how much
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// The friend owes the user this amount
    OwesYou(u64),

    /// The user owes the friend this amount
    YouOwe(u64),

    /// Nothing is owed either way
    Even,
}

impl From<i64> for Standing {
    fn from(balance: i64) -> Self {
        match balance {
            0 => Self::Even,
            b if b > 0 => Self::OwesYou(b.unsigned_abs()),
            b => Self::YouOwe(b.unsigned_abs()),
        }
    }
}

/// The friends every ledger starts out with
#[must_use]
pub fn initial_friends() -> Vec<Friend> {
    [(118_836_u64, "Clark", -7), (933_372, "Sarah", 20), (499_476, "Anthony", 0)]
        .into_iter()
        .map(|(id, name, balance)| Friend {
            id: FriendId::from(id),
            name: name.to_string(),
            image: format!("https://i.pravatar.cc/48?u={}", id),
            balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn seed() {
        let friends = initial_friends();

        let expected = vec![
            Friend {
                id: "118836".into(),
                name: "Clark".to_string(),
                image: "https://i.pravatar.cc/48?u=118836".to_string(),
                balance: -7,
            },
            Friend {
                id: "933372".into(),
                name: "Sarah".to_string(),
                image: "https://i.pravatar.cc/48?u=933372".to_string(),
                balance: 20,
            },
            Friend {
                id: "499476".into(),
                name: "Anthony".to_string(),
                image: "https://i.pravatar.cc/48?u=499476".to_string(),
                balance: 0,
            },
        ];

        assert_eq!(friends, expected);
    }

    #[test_case(20 => Standing::OwesYou(20); "friend owes")]
    #[test_case(-7 => Standing::YouOwe(7); "user owes")]
    #[test_case(0 => Standing::Even; "even")]
    #[test_case(i64::MIN => Standing::YouOwe(9_223_372_036_854_775_808); "no overflow")]
    fn standing(balance: i64) -> Standing {
        Standing::from(balance)
    }

    #[test]
    fn deserialise_yaml() {
        let raw = r#"
        id: "118836"
        name: Clark
        image: https://i.pravatar.cc/48?u=118836
        balance: -7
        "#;

        let friend: Friend = serde_yaml::from_str(raw).unwrap();
        assert_eq!(friend, initial_friends()[0]);
    }
}
