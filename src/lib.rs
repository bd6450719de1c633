//! # guess-number
//!
//! A small web game: every visitor gets a secret number between 1 and 100
//! and keeps guessing until they hit it.
//!
//! ## Features
//!
//! - **Per-player games**: one secret per browser, keyed by an HttpOnly cookie
//! - **In-memory sessions**: an owned, thread-safe [`SessionStore`] shared by handlers
//! - **Server-rendered page**: a single HTML form rendered with `maud`
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use guess_number::api::{serve_with_state, AppState, ServerConfig};
//! use guess_number::SessionStore;
//!
//! #[tokio::main]
//! async fn main() -> guess_number::Result<()> {
//!     guess_number::logging::try_init(None).ok();
//!
//!     let store = Arc::new(SessionStore::new());
//!     serve_with_state(ServerConfig::default(), AppState::with_store(store)).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod page;
pub mod session;

// Re-export commonly used types
pub use error::{GameError, Result};
pub use game::{evaluate, Outcome};
pub use page::{render, Status};
pub use session::{SessionId, SessionStore, SECRET_RANGE};
