use std::path::Path;

use crate::error::SetupError;

/// Directory name of the unmodified template checkout.
pub const TEMPLATE_NAME: &str = "claude-tanstack-python-starter";

/// Suggested name when the directory name is unusable.
pub const FALLBACK_NAME: &str = "my-project";

/// The answers collected from the user, fixed for the rest of the run.
///
/// Empty `description` or `author` means the user skipped the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    pub name: String,
    pub description: String,
    pub author: String,
}

impl ProjectIdentity {
    /// Builds an identity after checking `name` with [`validate_name`].
    pub fn new(name: &str, description: &str, author: &str) -> Result<Self, SetupError> {
        validate_name(name)?;
        Ok(ProjectIdentity {
            name: name.to_string(),
            description: description.trim().to_string(),
            author: author.trim().to_string(),
        })
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

/// Checks that `name` is non-empty and made of `a-z`, `0-9` and `-` only.
pub fn validate_name(name: &str) -> Result<(), SetupError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(SetupError::InvalidName(name.to_string()))
    }
}

/// Picks the default offered at the project name prompt.
///
/// Uses the last segment of `dir`, unless the directory is still named after
/// the template (or has no usable last segment), in which case
/// [`FALLBACK_NAME`] is returned.
pub fn suggest_name(dir: &Path) -> String {
    match dir.file_name().and_then(|s| s.to_str()) {
        Some(folder) if folder != TEMPLATE_NAME => folder.to_string(),
        _ => FALLBACK_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_lowercase_digits_and_hyphens() {
        for name in ["foo", "my-app", "app2", "-", "0-0-0", "a--b"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["", "Foo", "my_app", "my app", "app.js", "café", "a/b", " foo"] {
            let result = validate_name(name);
            assert!(
                matches!(result, Err(SetupError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn suggestion_uses_folder_name() {
        let dir = PathBuf::from("/home/me/code/rocket-shop");
        assert_eq!(suggest_name(&dir), "rocket-shop");
    }

    #[test]
    fn suggestion_falls_back_for_template_checkout() {
        let dir = PathBuf::from("/home/me/code").join(TEMPLATE_NAME);
        assert_eq!(suggest_name(&dir), FALLBACK_NAME);
    }

    #[test]
    fn suggestion_falls_back_at_filesystem_root() {
        assert_eq!(suggest_name(&PathBuf::from("/")), FALLBACK_NAME);
    }

    #[test]
    fn identity_trims_optional_fields() {
        let id = ProjectIdentity::new("foo", "  A tool ", "").expect("valid identity");
        assert_eq!(id.description, "A tool");
        assert!(id.has_description());
        assert!(!id.has_author());
    }

    #[test]
    fn identity_rejects_bad_name() {
        assert!(ProjectIdentity::new("Bad Name", "", "").is_err());
    }
}
