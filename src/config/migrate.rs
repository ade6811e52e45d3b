//! Keep an existing config file in line with the current set of keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Help lines injected right after the matching key when a file is written.
const KEY_NOTES: &[(&str, &str)] = &[
    (
        "timestamp:",
        "  # timestamp options:\n\
         #   created  → file creation time (modification time where unsupported)\n\
         #   modified → file modification time\n",
    ),
    (
        "trailing_break:",
        "  # trailing_break options:\n\
         #   drop → last file of a shot is not reported when it starts a new session\n\
         #   keep → report it as a zero-length session\n",
    ),
];

fn default_mapping() -> AppResult<Mapping> {
    let value =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;

    match serde_yaml::from_str::<Value>(&content)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
    {
        Value::Mapping(m) => Ok(m),
        // an empty file parses as null
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: expected a mapping at the top level",
            path.display()
        ))),
    }
}

/// Keys known to this version that the file at `path` does not set.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values and
/// unknown keys are preserved. Returns the keys that were added.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (k, v) in default_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(format!("Failed to serialize {}: {e}", path.display())))?;
    fs::write(path, annotate(&serialized))?;

    tracing::info!(path = %path.display(), added = ?added, "config keys added");
    Ok(added)
}

/// Insert the option notes after the keys they describe.
pub fn annotate(yaml: &str) -> String {
    let mut out = String::new();

    for line in yaml.lines() {
        out.push_str(line);
        out.push('\n');

        if let Some((_, note)) = KEY_NOTES.iter().find(|(key, _)| line.starts_with(key)) {
            out.push_str(note);
        }
    }

    out
}
