use std::fmt;

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub display_name: String,
    pub username: String,
    pub password: String, // Plaintext
}

impl Account {
    pub fn new(
        display_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Account {
            display_name: display_name.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }
}

// `age` is free text and never parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendEntry {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub location: String,
}

impl fmt::Display for FriendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Friend: {} | Gender: {} | Age: {} | Location: {}",
            self.name, self.gender, self.age, self.location
        )
    }
}

/// Handle for the logged-in account.
///
/// A session stays valid only while `SessionService` still considers its `id`
/// active; holding a copy after logout grants nothing.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    pub account: Account,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(account: Account) -> Self {
        Session {
            id: Uuid::new_v4(),
            account,
            started_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn duration(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }

    pub fn started_label(&self) -> String {
        self.started_at
            .with_timezone(&Local)
            .format("%b %d, %H:%M")
            .to_string()
    }
}
