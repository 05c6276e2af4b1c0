use std::collections::HashMap;

use log::{debug, info};

use crate::error::{Error, Result, ValidationError};
use crate::models::{FriendEntry, Session};
use crate::session::SessionService;

/// Friend lists per account, held in memory only and lost on exit.
///
/// Each list keeps insertion order; re-adding a name replaces the entry in
/// place.
#[derive(Default)]
pub struct FriendListService {
    lists: HashMap<String, Vec<FriendEntry>>,
}

impl FriendListService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_friend(
        &mut self,
        sessions: &SessionService,
        session: &Session,
        name: &str,
        gender: &str,
        age: &str,
        location: &str,
    ) -> Result<FriendEntry> {
        let owner = sessions.verify(session)?;
        if name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::EmptyName));
        }

        let entry = FriendEntry {
            name: name.to_string(),
            gender: gender.to_string(),
            age: age.to_string(),
            location: location.to_string(),
        };
        let list = self.lists.entry(owner.username.clone()).or_default();
        match list.iter_mut().find(|f| f.name == entry.name) {
            Some(existing) => {
                *existing = entry.clone();
                debug!("Replaced friend {} of {}", entry.name, owner.username);
            }
            None => {
                list.push(entry.clone());
                info!("Added friend {} for {}", entry.name, owner.username);
            }
        }
        Ok(entry)
    }

    /// Removing a name that is not in the list succeeds without change.
    pub fn remove_friend(
        &mut self,
        sessions: &SessionService,
        session: &Session,
        name: &str,
    ) -> Result<()> {
        let owner = sessions.verify(session)?;
        if name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::EmptyName));
        }

        if let Some(list) = self.lists.get_mut(&owner.username) {
            let before = list.len();
            list.retain(|f| f.name != name);
            if list.len() < before {
                info!("Removed friend {} for {}", name, owner.username);
            }
        }
        Ok(())
    }

    pub fn list_friends(
        &self,
        sessions: &SessionService,
        session: &Session,
    ) -> Result<Vec<FriendEntry>> {
        let owner = sessions.verify(session)?;
        Ok(self
            .lists
            .get(&owner.username)
            .cloned()
            .unwrap_or_default())
    }
}
