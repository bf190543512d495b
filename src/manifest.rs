use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};

use crate::{error::SetupError, identity::ProjectIdentity};

/// Root manifest, relative to the repository root.
pub const ROOT_MANIFEST: &str = "package.json";
/// Web app manifest, relative to the repository root.
pub const WEB_MANIFEST: &str = "apps/web/package.json";
/// API app manifest, relative to the repository root.
pub const API_MANIFEST: &str = "apps/api/package.json";
/// Python project descriptor of the API app, relative to the repository root.
pub const API_PYPROJECT: &str = "apps/api/pyproject.toml";

/// Script entry removed by the cleanup step.
pub const SETUP_SCRIPT: &str = "init-project";

/// Top-level `name = "..."` line; `R` lets `$` match before `\r\n` too.
static PYPROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?mR)^name = ".*"$"#).expect("valid regex"));

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was rewritten.
    Updated(PathBuf),
    /// The file does not exist and was left alone.
    Skipped(PathBuf),
    /// The file exists but needed no change, so it was not written.
    Unchanged(PathBuf),
}

/// Overwrites `updates` keys in the JSON object stored at `path`.
///
/// Keys not listed in `updates` keep their value and position. The result is
/// written back with two-space indentation and a trailing newline.
pub fn update_json_file(
    path: &Path,
    updates: Map<String, Value>,
) -> Result<FileOutcome, SetupError> {
    let Some(mut object) = read_json_object(path)? else {
        return Ok(FileOutcome::Skipped(path.to_path_buf()));
    };

    for (key, value) in updates {
        object.insert(key, value);
    }

    write_json_object(path, object)?;
    Ok(FileOutcome::Updated(path.to_path_buf()))
}

/// Field updates for the root manifest.
pub fn root_updates(identity: &ProjectIdentity) -> Map<String, Value> {
    let mut updates = Map::new();
    updates.insert("name".into(), Value::String(identity.name.clone()));
    if identity.has_description() {
        updates.insert("description".into(), Value::String(identity.description.clone()));
    }
    if identity.has_author() {
        updates.insert("author".into(), Value::String(identity.author.clone()));
    }
    updates
}

/// Field updates for an app manifest, e.g. `suffix = "web"` and
/// `label = "Web Frontend"`.
pub fn app_updates(identity: &ProjectIdentity, suffix: &str, label: &str) -> Map<String, Value> {
    let mut updates = Map::new();
    updates.insert(
        "name".into(),
        Value::String(format!("{}-{}", identity.name, suffix)),
    );
    if identity.has_description() {
        updates.insert(
            "description".into(),
            Value::String(format!("{} - {}", identity.description, label)),
        );
    }
    updates
}

/// Rewrites the `name = "..."` line of a `pyproject.toml` to `<project>-api`.
///
/// Only the first matching line changes. A file without one is written back
/// as-is.
pub fn update_pyproject(path: &Path, project_name: &str) -> Result<FileOutcome, SetupError> {
    if !path.exists() {
        return Ok(FileOutcome::Skipped(path.to_path_buf()));
    }

    let body = fs::read_to_string(path).map_err(|e| SetupError::io(path, e))?;
    let transformed = rename_pyproject(&body, project_name);
    fs::write(path, transformed).map_err(|e| SetupError::io(path, e))?;

    Ok(FileOutcome::Updated(path.to_path_buf()))
}

/// Replaces the first `name = "..."` line of `body`.
fn rename_pyproject(body: &str, project_name: &str) -> String {
    let line = format!("name = \"{}-api\"", project_name);

    PYPROJECT_NAME.replacen(body, 1, NoExpand(&line)).into_owned()
}

/// Deletes `scripts.<script>` from the manifest at `path`.
///
/// Nothing is written when the manifest has no `scripts` map or the entry is
/// already gone.
pub fn remove_script(path: &Path, script: &str) -> Result<FileOutcome, SetupError> {
    let Some(mut object) = read_json_object(path)? else {
        return Ok(FileOutcome::Skipped(path.to_path_buf()));
    };

    let removed = match object.get_mut("scripts") {
        Some(Value::Object(scripts)) => scripts.shift_remove(script).is_some(),
        _ => false,
    };

    if !removed {
        return Ok(FileOutcome::Unchanged(path.to_path_buf()));
    }

    write_json_object(path, object)?;
    Ok(FileOutcome::Updated(path.to_path_buf()))
}

/// Reads `path` as a JSON object, or `None` if the file does not exist.
fn read_json_object(path: &Path) -> Result<Option<Map<String, Value>>, SetupError> {
    if !path.exists() {
        return Ok(None);
    }

    let body = fs::read_to_string(path).map_err(|e| SetupError::io(path, e))?;
    let value: Value = serde_json::from_str(&body).map_err(|source| SetupError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(object) => Ok(Some(object)),
        _ => Err(SetupError::NotAnObject(path.to_path_buf())),
    }
}

fn write_json_object(path: &Path, object: Map<String, Value>) -> Result<(), SetupError> {
    let rendered = serde_json::to_string_pretty(&Value::Object(object)).map_err(|source| {
        SetupError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, rendered + "\n").map_err(|e| SetupError::io(path, e))
}
