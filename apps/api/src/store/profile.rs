use std::sync::{PoisonError, RwLock};

use portfolio_types::Profile;
use tracing::info;

/// Holds the single portfolio profile.
pub struct ProfileStore {
    current: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new(initial: Profile) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Returns the current profile. Never fails: a poisoned lock still holds
    /// a complete profile because writers only ever swap the whole value.
    pub fn get(&self) -> Profile {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrites the profile with `profile` and returns it. No merging:
    /// fields absent from `profile` are gone afterwards.
    pub fn replace(&self, profile: Profile) -> Profile {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = profile.clone();
        info!("Replaced profile for {}", profile.name);
        profile
    }
}
