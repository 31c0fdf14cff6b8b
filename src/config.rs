//! Runtime configuration, read from the environment (and `.env`).

use std::path::PathBuf;

use crate::error::{PlannerError, Result};

pub const DATA_DIR_VAR: &str = "WORKOUT_TABLES_DATA_DIR";
pub const FONT_VAR: &str = "WORKOUT_TABLES_FONT";
pub const WINDOW_VAR: &str = "WORKOUT_TABLES_WINDOW";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the stored tables.
    pub data_dir: PathBuf,
    /// TTF file used for all text; egui's built-in fonts when unset.
    pub font_path: Option<PathBuf>,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            font_path: None,
            window_size: [1280.0, 800.0],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config.font_path = lookup(FONT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        if let Some(size) = lookup(WINDOW_VAR) {
            config.window_size = parse_window_size(&size)?;
        }

        Ok(config)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1920x1080`.
fn parse_window_size(s: &str) -> Result<[f32; 2]> {
    let invalid = || PlannerError::Config {
        message: format!("{WINDOW_VAR} must look like 1280x800, got '{s}'"),
    };
    let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let w: f32 = w.trim().parse().map_err(|_| invalid())?;
    let h: f32 = h.trim().parse().map_err(|_| invalid())?;
    if w <= 0.0 || h <= 0.0 || !w.is_finite() || !h.is_finite() {
        return Err(invalid());
    }
    Ok([w, h])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/tmp/tables"),
            (FONT_VAR, "fonts/Inconsolata.ttf"),
            (WINDOW_VAR, "1920x1080"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.font_path, Some(PathBuf::from("fonts/Inconsolata.ttf")));
        assert_eq!(config.window_size, [1920.0, 1080.0]);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config =
            Config::from_lookup(lookup(&[(DATA_DIR_VAR, "  "), (FONT_VAR, "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn bad_window_size_is_an_error() {
        for bad in ["big", "1920", "0x600", "-5x5", "axb"] {
            let err = Config::from_lookup(lookup(&[(WINDOW_VAR, bad)])).unwrap_err();
            assert!(matches!(err, PlannerError::Config { .. }), "input {bad:?}");
        }
    }
}
