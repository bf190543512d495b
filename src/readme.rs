use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::SetupError, identity::ProjectIdentity, manifest::FileOutcome};

/// Default template location, relative to the repository root.
pub const TEMPLATE_PATH: &str = "scripts/README.template.md";

/// Generated README, relative to the repository root.
pub const README_PATH: &str = "README.md";

/// Used for `{{DESCRIPTION}}` when the user gave no description.
pub const DEFAULT_DESCRIPTION: &str =
    "A fullstack application with React frontend and Python FastAPI backend.";

const NAME_TOKEN: &str = "{{PROJECT_NAME}}";
const DESCRIPTION_TOKEN: &str = "{{DESCRIPTION}}";

/// Substitutes every placeholder token in `template`.
///
/// Replacement is literal: values are inserted verbatim and never re-scanned
/// for tokens.
pub fn render(template: &str, identity: &ProjectIdentity) -> String {
    let description = if identity.has_description() {
        identity.description.as_str()
    } else {
        DEFAULT_DESCRIPTION
    };

    template
        .split(DESCRIPTION_TOKEN)
        .map(|chunk| chunk.replace(NAME_TOKEN, &identity.name))
        .collect::<Vec<String>>()
        .join(description)
}

/// Renders `template_path` into `<root>/README.md`, replacing any existing
/// README.
///
/// # Errors
///
/// Returns [`SetupError::TemplateMissing`] if the template does not exist,
/// or [`SetupError::Io`] if reading or writing fails.
pub fn generate(
    root: &Path,
    template_path: &Path,
    identity: &ProjectIdentity,
) -> Result<FileOutcome, SetupError> {
    if !template_path.exists() {
        return Err(SetupError::TemplateMissing(template_path.to_path_buf()));
    }

    let template =
        fs::read_to_string(template_path).map_err(|e| SetupError::io(template_path, e))?;
    let readme_path: PathBuf = root.join(README_PATH);

    fs::write(&readme_path, render(&template, identity))
        .map_err(|e| SetupError::io(&readme_path, e))?;

    Ok(FileOutcome::Updated(readme_path))
}
