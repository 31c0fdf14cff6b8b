//! Error types for the workout tables app.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Table index past the end of the collection.
    #[error("No table at index {index} (there are {len})")]
    TableOutOfRange { index: usize, len: usize },

    /// Exercise index past the end of a table.
    #[error("No exercise at index {index} in table {table} (it has {len})")]
    ExerciseOutOfRange { table: usize, index: usize, len: usize },

    #[error("Unknown exercise field: {name}")]
    UnknownField { name: String },

    /// Reading or writing a stored key failed.
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize tables: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_messages_name_the_bounds() {
        let err = PlannerError::TableOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No table at index 4 (there are 2)");

        let err = PlannerError::ExerciseOutOfRange {
            table: 1,
            index: 9,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "No exercise at index 9 in table 1 (it has 3)"
        );
    }

    #[test]
    fn storage_error_displays_path() {
        let err = PlannerError::Storage {
            path: PathBuf::from("/data/workoutTables.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/workoutTables.json"));
    }
}
