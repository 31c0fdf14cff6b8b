//! The table collection store.
//!
//! [`TableStore`] owns the current [`Collection`] snapshot and its durable
//! mirror. All mutations go through [`TableStore::dispatch`]: the next
//! snapshot is computed from the current one by [`Collection::apply`], swapped
//! in, and the whole document is written back under [`STORAGE_KEY`].

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::defaults::{default_collection, default_table};
use crate::error::{PlannerError, Result};
use crate::models::{Collection, ExerciseRecord, Field, Table};
use crate::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "workoutTables";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AddTable,
    RenameTable {
        table: usize,
        name: String,
    },
    AddExercise {
        table: usize,
    },
    SetField {
        table: usize,
        exercise: usize,
        field: Field,
        value: String,
    },
}

impl Collection {
    /// Returns the collection that results from `action`, leaving `self` as is.
    pub fn apply(&self, action: &Action) -> Result<Collection> {
        let mut next = self.clone();
        match action {
            Action::AddTable => next.tables.push(default_table()),
            Action::RenameTable { table, name } => {
                next.table_mut(*table)?.name = name.clone();
            }
            Action::AddExercise { table } => {
                next.table_mut(*table)?
                    .exercises
                    .push(ExerciseRecord::default());
            }
            Action::SetField {
                table,
                exercise,
                field,
                value,
            } => {
                let table_index = *table;
                let rows = &mut next.table_mut(table_index)?.exercises;
                let len = rows.len();
                let record = rows
                    .get_mut(*exercise)
                    .ok_or(PlannerError::ExerciseOutOfRange {
                        table: table_index,
                        index: *exercise,
                        len,
                    })?;
                record.set(*field, value.clone());
            }
        }
        Ok(next)
    }

    fn table_mut(&mut self, index: usize) -> Result<&mut Table> {
        let len = self.tables.len();
        self.tables
            .get_mut(index)
            .ok_or(PlannerError::TableOutOfRange { index, len })
    }
}

pub struct TableStore<S> {
    storage: S,
    collection: Collection,
    last_saved: Option<DateTime<Local>>,
}

impl<S: KeyValueStore> TableStore<S> {
    /// Reads the stored collection, falling back to the built-in default when
    /// the key is missing, unreadable or not valid JSON.
    pub fn load(storage: S) -> Self {
        let collection = match storage.get_string(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Collection>(&raw) {
                Ok(collection) => {
                    info!(tables = collection.tables.len(), "loaded workout tables");
                    collection
                }
                Err(e) => {
                    warn!("stored tables are not valid JSON, using defaults: {}", e);
                    default_collection()
                }
            },
            Ok(None) => {
                info!("no stored tables, starting from the default table");
                default_collection()
            }
            Err(e) => {
                warn!("could not read stored tables, using defaults: {}", e);
                default_collection()
            }
        };

        Self {
            storage,
            collection,
            last_saved: None,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// Applies `action` and persists the result. A rejected action changes
    /// nothing. If only the write fails the new snapshot is kept, so the next
    /// successful persist catches storage up.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, "dispatch");
        self.collection = self.collection.apply(&action)?;
        self.persist()
    }

    pub fn add_table(&mut self) -> Result<()> {
        self.dispatch(Action::AddTable)
    }

    pub fn rename_table(&mut self, table: usize, name: impl Into<String>) -> Result<()> {
        self.dispatch(Action::RenameTable {
            table,
            name: name.into(),
        })
    }

    pub fn add_exercise(&mut self, table: usize) -> Result<()> {
        self.dispatch(Action::AddExercise { table })
    }

    /// Field is addressed by its stored property name, e.g. `"substitution1"`.
    pub fn set_field(
        &mut self,
        table: usize,
        exercise: usize,
        field_name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let field = field_name.parse::<Field>()?;
        self.dispatch(Action::SetField {
            table,
            exercise,
            field,
            value: value.into(),
        })
    }

    /// Writes the whole collection under [`STORAGE_KEY`].
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.collection)?;
        self.storage.set_string(STORAGE_KEY, &json)?;
        self.last_saved = Some(Local::now());
        Ok(())
    }
}
