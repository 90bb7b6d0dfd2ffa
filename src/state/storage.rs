//! Session storage implementation
//!
//! In-memory store of every user's session and conversation context. Each
//! user gets their own async mutex, so events of one user are handled one at
//! a time while different users never wait on each other. Nothing survives a
//! restart. A slot with neither a session nor a running dialog is dropped
//! again when its guard is released.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use crate::models::{DailyGoals, Profile, UserSession};
use crate::utils::errors::{HealthBuddyError, Result};
use super::context::ConversationContext;

/// Everything the bot keeps about one user
#[derive(Debug)]
pub struct UserSlot {
    pub user_id: i64,
    pub session: Option<UserSession>,
    pub conversation: ConversationContext,
}

/// Exclusive access to one user's slot
pub type UserGuard = OwnedMutexGuard<UserSlot>;

impl UserSlot {
    fn new(user_id: i64) -> Self {
        Self {
            user_id,
            session: None,
            conversation: ConversationContext::new(user_id),
        }
    }

    /// The user's session, if the profile has been set up
    pub fn get(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Store a session as given
    pub fn upsert(&mut self, session: UserSession) {
        self.session = Some(session);
    }

    /// Store a new profile with fresh goals, keeping already logged totals
    pub fn commit_profile(&mut self, profile: Profile, goals: DailyGoals) -> &UserSession {
        let mut session = UserSession::new(self.user_id, profile, goals);
        if let Some(previous) = self.session.take() {
            session.logged_water = previous.logged_water;
            session.logged_food = previous.logged_food;
            session.burned_calories = previous.burned_calories;
        }
        self.session.insert(session)
    }

    fn session_mut(&mut self) -> Result<&mut UserSession> {
        let user_id = self.user_id;
        self.session
            .as_mut()
            .ok_or(HealthBuddyError::UserNotFound { user_id })
    }

    /// Add drunk water in mL
    pub fn add_logged_water(&mut self, amount: f64) -> Result<&UserSession> {
        let session = self.session_mut()?;
        session.logged_water += amount;
        Ok(session)
    }

    /// Add eaten calories
    pub fn add_logged_food(&mut self, kcal: f64) -> Result<&UserSession> {
        let session = self.session_mut()?;
        session.logged_food += kcal;
        Ok(session)
    }

    /// Add calories burned by a workout
    pub fn add_burned_calories(&mut self, kcal: f64) -> Result<&UserSession> {
        let session = self.session_mut()?;
        session.burned_calories += kcal;
        Ok(session)
    }
}

/// In-memory session store with one lock per user
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<HashMap<i64, Arc<Mutex<UserSlot>>>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock one user's slot, creating it on first use
    ///
    /// The map itself is only locked while the user's mutex is looked up.
    pub async fn lock(&self, user_id: i64) -> UserGuard {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots
                .entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(UserSlot::new(user_id))))
                .clone()
        };

        debug!(user_id = user_id, "Acquiring user lock");
        slot.lock_owned().await
    }

    /// Unlock a slot, dropping it when it holds nothing worth keeping
    ///
    /// The slot is only removed when no other task holds or waits for it.
    /// New handles are only handed out under the map lock, so the check
    /// cannot race with `lock`.
    pub async fn release(&self, guard: UserGuard) {
        let user_id = guard.user_id;
        let empty = guard.session.is_none() && !guard.conversation.is_active();

        let mut slots = self.slots.lock().await;
        drop(guard);

        if empty && slots.get(&user_id).is_some_and(|slot| Arc::strong_count(slot) == 1) {
            slots.remove(&user_id);
            debug!(user_id = user_id, "Dropped empty user slot");
        }
    }

    /// Copy of the user's session
    pub async fn get(&self, user_id: i64) -> Option<UserSession> {
        let slot = self.lock(user_id).await;
        let session = slot.get().cloned();
        self.release(slot).await;
        session
    }

    /// Insert or replace the user's session
    pub async fn upsert(&self, user_id: i64, session: UserSession) {
        self.lock(user_id).await.upsert(session);
    }

    /// Add drunk water; fails with `UserNotFound` when there is no session
    pub async fn add_logged_water(&self, user_id: i64, amount: f64) -> Result<UserSession> {
        let mut slot = self.lock(user_id).await;
        let result = slot.add_logged_water(amount).cloned();
        self.release(slot).await;
        result
    }

    /// Add eaten calories; fails with `UserNotFound` when there is no session
    pub async fn add_logged_food(&self, user_id: i64, kcal: f64) -> Result<UserSession> {
        let mut slot = self.lock(user_id).await;
        let result = slot.add_logged_food(kcal).cloned();
        self.release(slot).await;
        result
    }

    /// Add burned calories; fails with `UserNotFound` when there is no session
    pub async fn add_burned_calories(&self, user_id: i64, kcal: f64) -> Result<UserSession> {
        let mut slot = self.lock(user_id).await;
        let result = slot.add_burned_calories(kcal).cloned();
        self.release(slot).await;
        result
    }
}
