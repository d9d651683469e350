use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{AppState, AuthUser};
use crate::data::{Account, account, session};
use crate::errors::ChatError;
use crate::suggest::{self, UserProfile};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ChatError> {
    let username = match form.username.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Ok((StatusCode::NOT_FOUND, "Username is missing").into_response()),
    };
    let email = match form.email.as_deref() {
        Some(e) if !e.is_empty() => e,
        _ => return Ok((StatusCode::NOT_FOUND, "Email is missing").into_response()),
    };
    let password = match form.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Ok((StatusCode::NOT_FOUND, "Password is missing").into_response()),
    };

    if account::username_taken(&state.db, username)? {
        return Err(ChatError::UsernameTaken);
    }
    if account::email_taken(&state.db, email)? {
        return Err(ChatError::EmailTaken);
    }

    let new_account = Account::create_new(username, email, password);
    Account::store(&state.db, &new_account)?;
    info!("Registered account for {}", username);

    Ok((StatusCode::CREATED, "User created successfully").into_response())
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username_or_email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    username: String,
    token: String,
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ChatError> {
    let ident = match form.username_or_email.as_deref() {
        Some(i) if !i.is_empty() => i,
        _ => {
            return Ok(
                (StatusCode::NOT_FOUND, "Neither Username nor Email are provided").into_response(),
            );
        }
    };
    let password = match form.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Ok((StatusCode::NOT_FOUND, "Password is missing").into_response()),
    };

    // Try the identifier as a username first, then as an email
    let stored = match Account::load(&state.db, ident) {
        Ok(found) => found,
        Err(ChatError::AccountNotFound) => Account::load_by_email(&state.db, ident)?,
        Err(e) => return Err(e),
    };

    if !stored.verify_password(password) {
        return Err(ChatError::InvalidCredentials);
    }

    let token = session::issue(&stored.username);
    debug!("Successful login for {}", stored.username);

    Ok(Json(LoginResponse {
        username: stored.username,
        token,
    })
    .into_response())
}

#[derive(Debug, Serialize)]
struct ActiveUser {
    username: String,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct OnlineUsersResponse {
    active_users: Vec<ActiveUser>,
}

/// GET /api/online-users
pub async fn online_users(_user: AuthUser) -> Response {
    let active_users = session::active_usernames()
        .into_iter()
        .map(|username| ActiveUser {
            username,
            status: "Active",
        })
        .collect();

    Json(OnlineUsersResponse { active_users }).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ChatStartForm {
    username: Option<String>,
}

/// POST /api/chat/start
pub async fn chat_start(user: AuthUser, Form(form): Form<ChatStartForm>) -> Response {
    let target = match form.username.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return (StatusCode::NOT_FOUND, "Username is missing").into_response(),
    };

    if !session::is_active(target) {
        return (
            StatusCode::NOT_FOUND,
            "User is not online or is not a valid User",
        )
            .into_response();
    }

    let room = room_name(target, &user.into_inner());
    (
        StatusCode::OK,
        format!("User is active, chat is open at room {}", room),
    )
        .into_response()
}

// Room names put the invited user first
fn room_name(target: &str, requester: &str) -> String {
    format!("{}_{}", target, requester)
}

#[derive(Debug, Serialize)]
struct SuggestedFriendsResponse {
    suggested_users: Vec<UserProfile>,
}

/// GET /api/suggested-friends/:user_id
///
/// The population document is re-read on every request so suggestions
/// always reflect the file on disk.
pub async fn suggested_friends(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Response, ChatError> {
    let snapshot = suggest::load_population(&state.profiles_path)?;
    let suggested_users = suggest::recommend(user_id, &snapshot)?;

    Ok(Json(SuggestedFriendsResponse { suggested_users }).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_order() {
        // The invited user comes before the requester
        assert_eq!(room_name("alice", "bob"), "alice_bob");
        assert_eq!(room_name("bob", "alice"), "bob_alice");
    }
}
