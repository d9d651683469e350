use dashmap::DashMap;
use once_cell::sync::Lazy;

/// An issued login session
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub issued_at: u64, // Unix timestamp
}

/// Global session registry using DashMap for concurrent access,
/// keyed by the opaque token handed out at login
static SESSIONS: Lazy<DashMap<String, Session>> = Lazy::new(DashMap::new);

/// Issue a token for a user, reusing the existing one if the user
/// already holds a session
pub fn issue(username: &str) -> String {
    // A second login must hand back the same token
    for entry in SESSIONS.iter() {
        if entry.value().username == username {
            return entry.key().clone();
        }
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let token = new_token();
    SESSIONS.insert(
        token.clone(),
        Session {
            username: username.to_string(),
            issued_at: now,
        },
    );

    token
}

/// Resolve a token to the username holding it
pub fn resolve(token: &str) -> Option<String> {
    SESSIONS.get(token).map(|entry| entry.value().username.clone())
}

/// Check whether a user currently holds a session
pub fn is_active(username: &str) -> bool {
    SESSIONS.iter().any(|entry| entry.value().username == username)
}

/// Usernames with a live session, sorted for stable output
pub fn active_usernames() -> Vec<String> {
    let mut usernames: Vec<String> = SESSIONS
        .iter()
        .map(|entry| entry.value().username.clone())
        .collect();
    usernames.sort();
    usernames
}

// 32 hex chars from a random u128
fn new_token() -> String {
    format!("{:032x}", rand::random::<u128>())
}
