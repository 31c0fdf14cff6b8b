use crate::models::{Collection, ExerciseRecord, Table};

pub const DEFAULT_TABLE_NAME: &str = "Añadir Nueva Tabla";

/// Built-in table shown on first start and used for every new table.
/// Each call builds a fresh value, so tables never share exercise lists.
pub fn default_table() -> Table {
    Table {
        name: DEFAULT_TABLE_NAME.to_string(),
        exercises: default_exercises(),
    }
}

pub fn default_collection() -> Collection {
    Collection {
        tables: vec![default_table()],
    }
}

fn default_exercises() -> Vec<ExerciseRecord> {
    vec![
        create_exercise(
            "Weak Point Exercise 1 (optional)",
            "3",
            "8-12",
            "~1-3 min",
            ("N/A", "N/A"),
            "Decide on your weak point using the Weak Point Table.",
        ),
        create_exercise(
            "Bottom-Half Machine Preacher Curl",
            "1",
            "10-12",
            "~1-2 min",
            ("Bottom-Half EZ-Bar Preacher Curl", "Bottom-Half DB Preacher Curl"),
            "All reps and sets are to be performed in the bottom half of the ROM.",
        ),
    ]
}

fn create_exercise(
    exercise: &str,
    sets: &str,
    reps: &str,
    rest: &str,
    substitutions: (&str, &str),
    notes: &str,
) -> ExerciseRecord {
    ExerciseRecord {
        exercise: exercise.to_string(),
        sets: sets.to_string(),
        reps: reps.to_string(),
        rest: rest.to_string(),
        substitution1: substitutions.0.to_string(),
        substitution2: substitutions.1.to_string(),
        notes: notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_the_example_exercises() {
        let table = default_table();
        assert_eq!(table.name, DEFAULT_TABLE_NAME);
        assert_eq!(table.exercises.len(), 2);
        assert_eq!(table.exercises[0].exercise, "Weak Point Exercise 1 (optional)");
        assert_eq!(table.exercises[0].reps, "8-12");
        assert_eq!(
            table.exercises[1].substitution2,
            "Bottom-Half DB Preacher Curl"
        );
    }

    #[test]
    fn default_collection_holds_one_table() {
        let collection = default_collection();
        assert_eq!(collection.tables, vec![default_table()]);
    }
}
