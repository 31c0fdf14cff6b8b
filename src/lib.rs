//! Editable workout plan tables, persisted under a single storage key.
//!
//! [`store::TableStore`] owns the tables and writes the whole collection back
//! after every change; [`view::WorkoutTablesApp`] draws it with egui.

pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{PlannerError, Result};
