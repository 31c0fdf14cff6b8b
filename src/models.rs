//models.rs
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PlannerError;

/// One row of a workout table. Every field is free text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseRecord {
    #[serde(deserialize_with = "loose_string")]
    pub exercise: String,
    #[serde(deserialize_with = "loose_string")]
    pub sets: String,
    #[serde(deserialize_with = "loose_string")]
    pub reps: String,
    #[serde(deserialize_with = "loose_string")]
    pub rest: String,
    #[serde(deserialize_with = "loose_string")]
    pub substitution1: String,
    #[serde(deserialize_with = "loose_string")]
    pub substitution2: String,
    #[serde(deserialize_with = "loose_string")]
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(deserialize_with = "loose_string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose_list")]
    pub exercises: Vec<ExerciseRecord>,
}

/// Accepts any JSON scalar where text is expected: numbers and bools keep
/// their JSON spelling, `null` becomes empty. Arrays and objects are kept as
/// their JSON text.
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

/// `null` reads as an empty list.
fn loose_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ExerciseRecord>, D::Error> {
    Ok(Option::<Vec<ExerciseRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Every table the user has, in display order. Serialized as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub tables: Vec<Table>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Exercise,
    Sets,
    Reps,
    Rest,
    Substitution1,
    Substitution2,
    Notes,
}

impl Field {
    /// Column order of the grid.
    pub const ALL: [Field; 7] = [
        Field::Exercise,
        Field::Sets,
        Field::Reps,
        Field::Rest,
        Field::Substitution1,
        Field::Substitution2,
        Field::Notes,
    ];

    /// Property name used in the stored document.
    pub fn key(self) -> &'static str {
        match self {
            Field::Exercise => "exercise",
            Field::Sets => "sets",
            Field::Reps => "reps",
            Field::Rest => "rest",
            Field::Substitution1 => "substitution1",
            Field::Substitution2 => "substitution2",
            Field::Notes => "notes",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Field::Exercise => "Exercise",
            Field::Sets => "Working Sets",
            Field::Reps => "Reps",
            Field::Rest => "Rest",
            Field::Substitution1 => "Substitution Option 1",
            Field::Substitution2 => "Substitution Option 2",
            Field::Notes => "Notes",
        }
    }
}

impl FromStr for Field {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| PlannerError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl ExerciseRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Exercise => &self.exercise,
            Field::Sets => &self.sets,
            Field::Reps => &self.reps,
            Field::Rest => &self.rest,
            Field::Substitution1 => &self.substitution1,
            Field::Substitution2 => &self.substitution2,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Exercise => &mut self.exercise,
            Field::Sets => &mut self.sets,
            Field::Reps => &mut self.reps,
            Field::Rest => &mut self.rest,
            Field::Substitution1 => &mut self.substitution1,
            Field::Substitution2 => &mut self.substitution2,
            Field::Notes => &mut self.notes,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_from_storage_key() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
        assert_eq!("substitution2".parse::<Field>().unwrap(), Field::Substitution2);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "weight".parse::<Field>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownField { ref name } if name == "weight"));
    }

    #[test]
    fn headers_follow_column_order() {
        let headers: Vec<_> = Field::ALL.iter().map(|f| f.header()).collect();
        assert_eq!(
            headers,
            [
                "Exercise",
                "Working Sets",
                "Reps",
                "Rest",
                "Substitution Option 1",
                "Substitution Option 2",
                "Notes"
            ]
        );
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut record = ExerciseRecord {
            exercise: "Squat".into(),
            sets: "3".into(),
            ..Default::default()
        };
        record.set(Field::Reps, "5".into());
        assert_eq!(record.get(Field::Reps), "5");
        assert_eq!(record.exercise, "Squat");
        assert_eq!(record.sets, "3");
        assert_eq!(record.notes, "");
    }

    #[test]
    fn collection_serializes_as_plain_array() {
        let collection = Collection {
            tables: vec![Table {
                name: "Legs".into(),
                exercises: vec![ExerciseRecord {
                    exercise: "Squat".into(),
                    ..Default::default()
                }],
            }],
        };
        let json: serde_json::Value = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "Legs");
        assert_eq!(json[0]["exercises"][0]["exercise"], "Squat");
        assert_eq!(json[0]["exercises"][0]["substitution1"], "");
    }

    #[test]
    fn loosely_typed_values_load_as_text() {
        let json = r#"[{"name":"Legs","exercises":[{"exercise":"Squat","sets":3}]}]"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.tables[0].name, "Legs");
        assert_eq!(collection.tables[0].exercises[0].exercise, "Squat");
        assert_eq!(collection.tables[0].exercises[0].sets, "3");

        let json = r#"[{"name":7,"exercises":[
            {"reps":8.5,"rest":true,"notes":null,"substitution1":["a"]}
        ]},{"name":"Empty","exercises":null}]"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        let record = &collection.tables[0].exercises[0];
        assert_eq!(collection.tables[0].name, "7");
        assert_eq!(record.reps, "8.5");
        assert_eq!(record.rest, "true");
        assert_eq!(record.notes, "");
        assert_eq!(record.substitution1, r#"["a"]"#);
        assert_eq!(record.exercise, "");
        assert!(collection.tables[1].exercises.is_empty());
    }

    #[test]
    fn partial_records_load_with_empty_fields() {
        let json = r#"[{"name":"Pull","exercises":[{"exercise":"Row","extra":1}]}]"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        let record = &collection.tables[0].exercises[0];
        assert_eq!(record.exercise, "Row");
        assert_eq!(record.sets, "");
        assert_eq!(record.notes, "");
    }
}
