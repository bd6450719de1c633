//! HTTP handlers for the game page.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::{debug, info};

use crate::page::{self, Status};
use crate::session::{SessionId, SessionStore};
use crate::Result;

/// Name of the cookie carrying the session ID.
pub const SESSION_COOKIE: &str = "userId";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(SessionStore::new()))
    }

    pub fn with_store(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Resolve the cookie to a session known to the store.
    fn session(&self, jar: &CookieJar) -> Result<Option<(SessionId, u8)>> {
        let Some(id) = session_id(jar) else {
            return Ok(None);
        };

        Ok(self.store.get(&id)?.map(|secret| (id, secret)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session ID carried by the cookie, if well-formed.
fn session_id(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|c| c.value().parse::<SessionId>().ok())
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Submitted guess form.
#[derive(Debug, Default, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    pub palpite: String,
}

/// `GET /`: show the form, starting a game if the player has none.
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let jar = match state.session(&jar)? {
        Some(_) => jar,
        None => {
            let (id, secret) = state.store.create()?;
            info!(session = %id, "new game started");
            debug!(session = %id, secret, "secret drawn");

            let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                .http_only(true)
                .path("/");
            jar.add(cookie)
        }
    };

    Ok((jar, Html(page::render(None, Status::Info, ""))))
}

/// `POST /`: evaluate a guess for the player's session.
pub async fn guess(
    State(state): State<AppState>,
    jar: CookieJar,
    form: std::result::Result<Form<GuessForm>, FormRejection>,
) -> Result<Response> {
    let Some(id) = session_id(&jar) else {
        debug!("guess without a session cookie, redirecting");
        return Ok(redirect_home());
    };

    let form = form.map(|Form(f)| f).unwrap_or_default();
    let Some(outcome) = state.store.play(&id, &form.palpite)? else {
        debug!(session = %id, "guess for unknown session, redirecting");
        return Ok(redirect_home());
    };
    debug!(session = %id, ?outcome, "guess evaluated");

    if outcome.is_correct() {
        info!(session = %id, "player won, round restarted");
    }

    let message = outcome.message();
    let body = page::render(Some(&message), outcome.status(), &outcome.guess_display());
    Ok(Html(body).into_response())
}
