use std::sync::Arc;

use bincode::{
    Decode, Encode,
    config::{self},
};
use rocksdb::DB;
use sha2::{Digest, Sha256};

use crate::errors::ChatError;

/// A registered user account
#[derive(Debug, Encode, Decode)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password_hash: String, // SHA-256 hex digest
    pub created_at: u64,       // Unix timestamp
}

impl Account {
    /// Function to create a new account (we shall hash the password)
    pub fn create_new(username: &str, email: &str, password: &str) -> Self {
        // Get current unix timestamp
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Account {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            created_at: now,
        }
    }

    /// Store an account
    pub fn store(db: &Arc<DB>, account: &Account) -> Result<(), ChatError> {
        let key = format!("account:{}", account.username);
        let value = account.encode()?;

        db.put(key.as_bytes(), &value)?;

        // Secondary key so registration can reject duplicate emails
        let email_key = format!("email:{}", account.email);
        db.put(email_key.as_bytes(), account.username.as_bytes())?;

        Ok(())
    }

    /// Load an account by username
    pub fn load(db: &Arc<DB>, username: &str) -> Result<Self, ChatError> {
        let key = format!("account:{}", username);

        let value = db.get(key.as_bytes())?;
        match value {
            Some(v) => Account::decode(&v),
            None => Err(ChatError::AccountNotFound),
        }
    }

    /// Load an account by the email it registered with
    pub fn load_by_email(db: &Arc<DB>, email: &str) -> Result<Self, ChatError> {
        let email_key = format!("email:{}", email);

        let value = db.get(email_key.as_bytes())?;
        let username = match value {
            Some(v) => String::from_utf8_lossy(&v).into_owned(),
            None => return Err(ChatError::AccountNotFound),
        };

        Account::load(db, &username)
    }

    /// Check a password attempt against the stored digest
    pub fn verify_password(&self, password: &str) -> bool {
        hash_password(password) == self.password_hash
    }

    /// Encode the Account to a byte vector using bincode
    fn encode(&self) -> Result<Vec<u8>, ChatError> {
        let config = config::standard();
        let encoded: Vec<u8> = bincode::encode_to_vec(self, config)?;

        Ok(encoded)
    }

    /// Decode an Account from a byte slice
    fn decode(bytes: &[u8]) -> Result<Self, ChatError> {
        let config = config::standard();
        let (decoded, _): (Self, _) = bincode::decode_from_slice(bytes, config)?;

        Ok(decoded)
    }
}

/// SHA-256 hex digest of a password
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Check whether a username is already registered
pub fn username_taken(db: &Arc<DB>, username: &str) -> Result<bool, ChatError> {
    let key = format!("account:{}", username);
    Ok(db.get(key.as_bytes())?.is_some())
}

/// Check whether an email is already registered
pub fn email_taken(db: &Arc<DB>, email: &str) -> Result<bool, ChatError> {
    let key = format!("email:{}", email);
    Ok(db.get(key.as_bytes())?.is_some())
}

/// Count stored accounts by scanning the account keyspace
pub fn count_accounts(db: &Arc<DB>) -> Result<usize, ChatError> {
    let iter = db.iterator(rocksdb::IteratorMode::Start);
    let mut count = 0;

    for item in iter {
        let (key, _) = item?;

        if let Ok(key_str) = std::str::from_utf8(&key) {
            if key_str.starts_with("account:") {
                count += 1;
            }
        }
    }

    Ok(count)
}
