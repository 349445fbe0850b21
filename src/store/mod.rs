use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Activity;
use crate::seed::seed_activities;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("email must not be empty")]
    BlankEmail,
}

/// Owns every activity and its participants. Lives in `AppState` behind a
/// lock; each method is a single check-and-mutate step.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    activities: IndexMap<String, Activity>,
}

impl ActivityStore {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Add `email` to `name`. Returns the normalized email that was stored.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<String, StoreError> {
        let email = normalize_email(email)?;
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.has_participant(&email) {
            return Err(StoreError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(StoreError::ActivityFull);
        }

        activity.participants.insert(email.clone());
        info!(activity = name, spots_left = activity.spots_left(), "Signed up participant");
        debug!(activity = name, email = %email, "Participant added");
        Ok(email)
    }

    /// Remove `email` from `name`. Returns the normalized email that was removed.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<String, StoreError> {
        let email = normalize_email(email)?;
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(StoreError::ActivityNotFound)?;

        // shift_remove keeps the remaining participants in signup order
        if !activity.participants.shift_remove(&email) {
            return Err(StoreError::NotSignedUp);
        }

        info!(activity = name, "Unregistered participant");
        debug!(activity = name, email = %email, "Participant removed");
        Ok(email)
    }
}

fn normalize_email(email: &str) -> Result<String, StoreError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(StoreError::BlankEmail);
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "test_student@example.com";

    fn small_store(max: usize) -> ActivityStore {
        let mut activities = IndexMap::new();
        activities.insert(
            "Tiny Club".to_string(),
            Activity::new("d", "s", max, &["first@example.com"]),
        );
        ActivityStore::new(activities)
    }

    #[test]
    fn seeded_store_lists_catalogue() {
        let store = ActivityStore::seeded();
        assert!(store.activities().contains_key("Basketball Team"));
        assert_eq!(store.activities().len(), seed_activities().len());
    }

    #[test]
    fn signup_adds_participant() {
        let mut store = ActivityStore::seeded();
        let stored = store.signup("Chess Club", EMAIL).unwrap();
        assert_eq!(stored, EMAIL);
        assert!(store.activities()["Chess Club"].has_participant(EMAIL));
    }

    #[test]
    fn signup_trims_email() {
        let mut store = ActivityStore::seeded();
        store.signup("Chess Club", "  padded@example.com ").unwrap();
        assert!(store.activities()["Chess Club"].has_participant("padded@example.com"));
    }

    #[test]
    fn duplicate_signup_rejected() {
        let mut store = ActivityStore::seeded();
        store.signup("Chess Club", EMAIL).unwrap();
        assert_eq!(store.signup("Chess Club", EMAIL), Err(StoreError::AlreadySignedUp));
    }

    #[test]
    fn signup_unknown_activity() {
        let mut store = ActivityStore::seeded();
        assert_eq!(store.signup("Knitting", EMAIL), Err(StoreError::ActivityNotFound));
    }

    #[test]
    fn blank_email_rejected_before_lookup() {
        let mut store = ActivityStore::seeded();
        assert_eq!(store.signup("Knitting", "   "), Err(StoreError::BlankEmail));
        assert_eq!(store.unregister("Chess Club", ""), Err(StoreError::BlankEmail));
    }

    #[test]
    fn full_activity_rejects_and_stays_unchanged() {
        let mut store = small_store(1);
        assert_eq!(store.signup("Tiny Club", EMAIL), Err(StoreError::ActivityFull));
        assert_eq!(store.activities()["Tiny Club"].participants.len(), 1);
    }

    #[test]
    fn duplicate_wins_over_full() {
        let mut store = small_store(1);
        assert_eq!(
            store.signup("Tiny Club", "first@example.com"),
            Err(StoreError::AlreadySignedUp)
        );
    }

    #[test]
    fn unregister_removes_then_rejects() {
        let mut store = ActivityStore::seeded();
        store.signup("Basketball Team", EMAIL).unwrap();
        store.unregister("Basketball Team", EMAIL).unwrap();
        assert!(!store.activities()["Basketball Team"].has_participant(EMAIL));
        assert_eq!(
            store.unregister("Basketball Team", EMAIL),
            Err(StoreError::NotSignedUp)
        );
    }

    #[test]
    fn unregister_unknown_activity() {
        let mut store = ActivityStore::seeded();
        assert_eq!(store.unregister("Knitting", EMAIL), Err(StoreError::ActivityNotFound));
    }

    #[test]
    fn unregister_preserves_order_of_others() {
        let mut store = small_store(5);
        store.signup("Tiny Club", "second@example.com").unwrap();
        store.signup("Tiny Club", "third@example.com").unwrap();
        store.unregister("Tiny Club", "second@example.com").unwrap();
        let order: Vec<&str> = store.activities()["Tiny Club"]
            .participants
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(order, vec!["first@example.com", "third@example.com"]);
    }

    #[test]
    fn unregister_frees_a_spot() {
        let mut store = small_store(1);
        store.unregister("Tiny Club", "first@example.com").unwrap();
        store.signup("Tiny Club", EMAIL).unwrap();
        assert!(store.activities()["Tiny Club"].is_full());
    }
}
