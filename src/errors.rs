use std::io;

#[derive(Debug)]
pub enum ChatError {
    AccountEncodeError(bincode::error::EncodeError),
    AccountDecodeError(bincode::error::DecodeError),
    StorageError(rocksdb::Error),
    AccountNotFound,
    UsernameTaken,
    EmailTaken,
    InvalidCredentials,
    ProfileNotFound(u64),
    SnapshotReadError(io::Error),
    SnapshotFormatError(serde_json::Error),
    ConfigError(String),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::AccountEncodeError(e) => write!(f, "Account encoding error: {}", e),
            ChatError::AccountDecodeError(e) => write!(f, "Account decoding error: {}", e),
            ChatError::StorageError(e) => write!(f, "RocksDB error: {}", e),
            ChatError::AccountNotFound => write!(f, "Account not found"),
            ChatError::UsernameTaken => write!(f, "Username already in use"),
            ChatError::EmailTaken => write!(f, "Email already in use"),
            ChatError::InvalidCredentials => write!(f, "Wrong password entered"),
            ChatError::ProfileNotFound(id) => write!(f, "No profile with id {}", id),
            ChatError::SnapshotReadError(e) => write!(f, "Profile snapshot read error: {}", e),
            ChatError::SnapshotFormatError(e) => write!(f, "Profile snapshot format error: {}", e),
            ChatError::ConfigError(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ChatError {}

impl From<bincode::error::EncodeError> for ChatError {
    fn from(err: bincode::error::EncodeError) -> Self {
        ChatError::AccountEncodeError(err)
    }
}

impl From<bincode::error::DecodeError> for ChatError {
    fn from(err: bincode::error::DecodeError) -> Self {
        ChatError::AccountDecodeError(err)
    }
}

impl From<rocksdb::Error> for ChatError {
    fn from(err: rocksdb::Error) -> Self {
        ChatError::StorageError(err)
    }
}

impl From<io::Error> for ChatError {
    fn from(err: io::Error) -> Self {
        ChatError::SnapshotReadError(err)
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::SnapshotFormatError(err)
    }
}
