//! Session storage.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::RwLock;

use rand::Rng;

use super::SessionId;
use crate::error::GameError;
use crate::game::{self, Outcome};
use crate::Result;

/// Range every secret number is drawn from.
pub const SECRET_RANGE: RangeInclusive<u8> = 1..=100;

/// Draw a uniformly random secret number from [`SECRET_RANGE`].
pub fn draw_secret() -> u8 {
    rand::rng().random_range(SECRET_RANGE)
}

/// Thread-safe mapping from session ID to the player's secret number.
///
/// Entries live for the lifetime of the store; nothing is ever evicted.
pub struct SessionStore {
    secrets: RwLock<HashMap<SessionId, u8>>,
}

impl SessionStore {
    /// Create a new empty session store.
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
        }
    }

    /// Start a new game: generate an ID, draw a secret and store the pair.
    pub fn create(&self) -> Result<(SessionId, u8)> {
        let id = SessionId::generate();
        let secret = draw_secret();

        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| GameError::LockPoisoned)?;

        secrets.insert(id, secret);
        Ok((id, secret))
    }

    /// Get the secret number for a session.
    pub fn get(&self, id: &SessionId) -> Result<Option<u8>> {
        let secrets = self
            .secrets
            .read()
            .map_err(|_| GameError::LockPoisoned)?;
        Ok(secrets.get(id).copied())
    }

    /// Check if a session exists.
    pub fn contains(&self, id: &SessionId) -> Result<bool> {
        let secrets = self
            .secrets
            .read()
            .map_err(|_| GameError::LockPoisoned)?;
        Ok(secrets.contains_key(id))
    }

    /// Replace the secret number of an existing session.
    ///
    /// Returns an error if the session doesn't exist.
    pub fn set(&self, id: &SessionId, secret: u8) -> Result<()> {
        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| GameError::LockPoisoned)?;

        let slot = secrets
            .get_mut(id)
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))?;

        *slot = secret;
        Ok(())
    }

    /// Evaluate a guess and, on a win, re-draw the secret.
    ///
    /// The lookup, the evaluation and the re-draw happen under one write
    /// lock, so guesses for the same session are judged one at a time.
    /// Returns `None` if the session doesn't exist.
    pub fn play(&self, id: &SessionId, raw: &str) -> Result<Option<Outcome>> {
        self.play_with(id, raw, draw_secret)
    }

    /// Like [`play`](Self::play), with a custom source for the next secret.
    pub fn play_with<F>(&self, id: &SessionId, raw: &str, redraw: F) -> Result<Option<Outcome>>
    where
        F: FnOnce() -> u8,
    {
        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| GameError::LockPoisoned)?;

        let Some(slot) = secrets.get_mut(id) else {
            return Ok(None);
        };

        let outcome = game::evaluate(*slot, raw);
        if outcome.is_correct() {
            *slot = redraw();
            tracing::debug!(session = %id, secret = *slot, "secret drawn");
        }

        Ok(Some(outcome))
    }

    /// Get the number of sessions in the store.
    pub fn count(&self) -> usize {
        self.secrets.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_secret_in_range() {
        for _ in 0..10_000 {
            assert!(SECRET_RANGE.contains(&draw_secret()));
        }
    }

    #[test]
    fn test_draw_secret_covers_bounds() {
        let draws: Vec<u8> = (0..20_000).map(|_| draw_secret()).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&100));
    }

    #[test]
    fn test_create_session() {
        let store = SessionStore::new();
        let (id, secret) = store.create().unwrap();

        assert!(store.contains(&id).unwrap());
        assert!(SECRET_RANGE.contains(&secret));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_get_session() {
        let store = SessionStore::new();
        let (id, secret) = store.create().unwrap();

        assert_eq!(store.get(&id).unwrap(), Some(secret));
    }

    #[test]
    fn test_get_nonexistent() {
        let store = SessionStore::new();
        let fake_id = SessionId::from_parts(42, 1);

        assert!(store.get(&fake_id).unwrap().is_none());
    }

    #[test]
    fn test_set_session() {
        let store = SessionStore::new();
        let (id, _) = store.create().unwrap();

        store.set(&id, 50).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(50));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_set_nonexistent() {
        let store = SessionStore::new();
        let fake_id = SessionId::from_parts(42, 1);

        let result = store.set(&fake_id, 50);
        assert!(matches!(result, Err(GameError::SessionNotFound(_))));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_play_wrong_guess_keeps_secret() {
        let store = SessionStore::new();
        let (id, _) = store.create().unwrap();
        store.set(&id, 50).unwrap();

        assert_eq!(store.play(&id, "70").unwrap(), Some(Outcome::TooHigh(70)));
        assert_eq!(store.play(&id, "abc").unwrap(), Some(Outcome::Invalid));
        assert_eq!(store.get(&id).unwrap(), Some(50));
    }

    #[test]
    fn test_play_win_redraws() {
        let store = SessionStore::new();
        let (id, _) = store.create().unwrap();
        store.set(&id, 50).unwrap();

        let outcome = store.play_with(&id, "50", || 7).unwrap();
        assert_eq!(outcome, Some(Outcome::Correct(50)));
        assert_eq!(store.get(&id).unwrap(), Some(7));
    }

    #[test]
    fn test_play_nonexistent() {
        let store = SessionStore::new();
        let fake_id = SessionId::from_parts(42, 1);

        assert_eq!(store.play(&fake_id, "50").unwrap(), None);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_concurrent_guesses_same_session() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        const GUESSERS: usize = 16;

        for _ in 0..50 {
            let store = Arc::new(SessionStore::new());
            let (id, _) = store.create().unwrap();
            store.set(&id, 50).unwrap();

            let barrier = Arc::new(Barrier::new(GUESSERS));
            let handles: Vec<_> = (0..GUESSERS)
                .map(|_| {
                    let store = Arc::clone(&store);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        store.play_with(&id, "50", || 10).unwrap().unwrap()
                    })
                })
                .collect();

            let outcomes: Vec<Outcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            // Only the first guess in line sees 50; the rest see the re-draw
            let wins = outcomes.iter().filter(|o| o.is_correct()).count();
            assert_eq!(wins, 1);
            assert!(outcomes
                .iter()
                .all(|o| *o == Outcome::Correct(50) || *o == Outcome::TooHigh(50)));
            assert_eq!(store.get(&id).unwrap(), Some(10));
        }
    }

    #[test]
    fn test_stores_are_isolated() {
        let a = SessionStore::new();
        let b = SessionStore::new();
        let (id, _) = a.create().unwrap();

        assert!(!b.contains(&id).unwrap());
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(SessionStore::new());
        let mut handles = vec![];

        // Spawn 100 threads that each create and then re-draw a session
        for _ in 0..100 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let (id, _) = store.create().unwrap();
                store.set(&id, draw_secret()).unwrap();
                id
            }));
        }

        let ids: Vec<SessionId> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // All IDs should be unique
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 100);

        assert_eq!(store.count(), 100);
        for id in &ids {
            let secret = store.get(id).unwrap().unwrap();
            assert!(SECRET_RANGE.contains(&secret));
        }
    }
}
