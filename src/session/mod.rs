//! Session management module.
//!
//! A session pairs an opaque, cookie-safe identifier with the secret
//! number its player is trying to guess.

mod id;
mod store;

pub use id::SessionId;
pub use store::{draw_secret, SessionStore, SECRET_RANGE};
