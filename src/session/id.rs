//! Session identifier type.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::GameError;

/// Last stamp handed out, in milliseconds since the UNIX epoch.
static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier for a player session.
///
/// An ID pairs a random 64-bit component with a strictly increasing
/// millisecond stamp, so two IDs never collide within one process even if
/// the random halves do. It is displayed as `XXXXXXXXXXXXXXXX-YYYY` (hex),
/// which is safe to use verbatim as a cookie value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId {
    random: u64,
    stamp: u64,
}

impl SessionId {
    /// Generate a fresh session ID.
    pub fn generate() -> Self {
        Self {
            random: rand::random(),
            stamp: next_stamp(),
        }
    }

    /// Create a SessionId from its raw parts.
    ///
    /// This is primarily for testing.
    pub fn from_parts(random: u64, stamp: u64) -> Self {
        Self { random, stamp }
    }
}

fn next_stamp() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let prev = LAST_STAMP
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);

    now.max(prev + 1)
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}-{:x}", self.random, self.stamp)
    }
}

impl FromStr for SessionId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidSessionId(s.into());

        let (random, stamp) = s.split_once('-').ok_or_else(invalid)?;
        if random.len() != 16 || stamp.is_empty() || stamp.len() > 16 {
            return Err(invalid());
        }
        // from_str_radix tolerates a leading sign; ids never carry one.
        if !random.bytes().chain(stamp.bytes()).all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let random = u64::from_str_radix(random, 16).map_err(|_| invalid())?;
        let stamp = u64::from_str_radix(stamp, 16).map_err(|_| invalid())?;
        Ok(Self { random, stamp })
    }
}
