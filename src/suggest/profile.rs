use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ChatError;

/// A user's interest profile as stored in the population document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    /// Interest name -> affinity level. Sparse; keys present for one
    /// profile need not be present for another. Kept in a BTreeMap so
    /// summation order is fixed across runs.
    pub interests: BTreeMap<String, f64>,
}

/// The full population of profiles loaded for one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub users: Vec<UserProfile>,
}

/// Load the population document from disk.
///
/// The document has the shape `{"users": [{"id": ..., "interests": {...}}]}`.
/// A record missing `id` or `interests` fails the whole load; records are
/// never skipped or coerced.
pub fn load_population(path: impl AsRef<Path>) -> Result<PopulationSnapshot, ChatError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let snapshot = serde_json::from_reader(reader)?;

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn test_load_population() {
        let temp_dir = TempDir::new("profiles").expect("Failed to create temp dir");
        let path = temp_dir.path().join("users.json");
        fs::write(
            &path,
            r#"{"users": [
                {"id": 1, "interests": {"chess": 5, "hiking": 2.5}},
                {"id": 2, "interests": {}}
            ]}"#,
        )
        .expect("Failed to write snapshot");

        let snapshot = load_population(&path).expect("Failed to load snapshot");
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.users[0].id, 1);
        assert_eq!(snapshot.users[0].interests["chess"], 5.0);
        assert_eq!(snapshot.users[0].interests["hiking"], 2.5);
        assert!(snapshot.users[1].interests.is_empty());
    }

    #[test]
    fn test_load_population_missing_file() {
        let result = load_population("no_such_users.json");
        assert!(matches!(result, Err(ChatError::SnapshotReadError(_))));
    }

    #[test]
    fn test_malformed_record_fails_the_load() {
        let temp_dir = TempDir::new("profiles").expect("Failed to create temp dir");
        let path = temp_dir.path().join("users.json");

        // Second record lacks `interests`
        fs::write(
            &path,
            r#"{"users": [
                {"id": 1, "interests": {"chess": 5}},
                {"id": 2}
            ]}"#,
        )
        .expect("Failed to write snapshot");

        let result = load_population(&path);
        assert!(matches!(result, Err(ChatError::SnapshotFormatError(_))));

        // Same for a record lacking `id`
        fs::write(&path, r#"{"users": [{"interests": {"chess": 5}}]}"#)
            .expect("Failed to write snapshot");

        let result = load_population(&path);
        assert!(matches!(result, Err(ChatError::SnapshotFormatError(_))));
    }
}
