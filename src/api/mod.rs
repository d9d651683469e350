use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rocksdb::DB;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::errors::ChatError;

mod auth;
mod handlers;

pub use auth::AuthUser;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Account database
    pub db: Arc<DB>,
    /// Profile population document, re-read on every suggestion request
    pub profiles_path: PathBuf,
}

/// Build the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/online-users", get(handlers::online_users))
        .route("/api/chat/start", post(handlers::chat_start))
        .route("/api/suggested-friends/:user_id", get(handlers::suggested_friends))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map domain errors onto the service's HTTP vocabulary
impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ChatError::AccountNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ChatError::ProfileNotFound(_) => {
                (StatusCode::NOT_FOUND, "User does not exist".to_string())
            }
            ChatError::UsernameTaken | ChatError::EmailTaken | ChatError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            _ => {
                error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_create_router() {
        let temp_dir = TempDir::new("router_db").expect("Failed to create temp dir");
        let db = crate::data::open_db(temp_dir.path()).expect("Failed to open RocksDB");

        let state = AppState {
            db,
            profiles_path: PathBuf::from("users.json"),
        };

        // Router should be created successfully
        let _router = create_router(state);
    }

    #[test]
    fn test_error_status_mapping() {
        let response = ChatError::ProfileNotFound(1001).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ChatError::AccountNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ChatError::UsernameTaken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ChatError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ChatError::ConfigError("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
