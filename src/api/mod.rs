//! HTTP layer for guess-number.
//!
//! ## Endpoints
//!
//! - `GET /` - Show the guess form, starting a new game when the
//!   `userId` cookie is missing or unknown
//! - `POST /` - Evaluate the form field `palpite` against the session's
//!   secret number; redirects to `GET /` when there is no session
//!
//! ## Example
//!
//! ```no_run
//! use guess_number::api::{ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> guess_number::Result<()> {
//!     let config = ServerConfig::new("127.0.0.1", 3000);
//!     serve(config).await
//! }
//! ```

pub mod handlers;
pub mod router;

// Re-export commonly used types
pub use handlers::{AppState, GuessForm, SESSION_COOKIE};
pub use router::{create_router, create_router_with_state, serve, serve_with_state, ServerConfig};
