//! # project-setup
//!
//! A one-shot initializer that turns a fresh template checkout into a named
//! project.
//!
//! This crate provides functionality to:
//! - Prompt for a project name, description and author
//! - Rewrite the root, web and API `package.json` manifests
//! - Rename the API's `pyproject.toml` project
//! - Render `README.md` from a placeholder template
//! - Optionally replace the git history with a single commit
//! - Optionally drop the `init-project` script from `package.json`
//!
//! ## Usage
//!
//! ```bash
//! # Interactive, in the repository root
//! project-setup
//!
//! # Scripted, no .git present: name, description, author, cleanup answer
//! printf 'rocket\nA tool\nAda\ny\n' | project-setup --root ./rocket
//!
//! # Scripted, .git present: the git reset question comes before cleanup
//! # (here: keep history, remove the script)
//! printf 'rocket\nA tool\nAda\nn\ny\n' | project-setup --root ./rocket
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`identity`] - Project name validation and suggestion
//! - [`manifest`] - `package.json` / `pyproject.toml` rewriting
//! - [`readme`] - README template rendering
//! - [`git`] - Git history reset
//! - [`prompt`] - User input abstractions
//! - [`banner`] - Summary banner and closing message
//! - [`error`] - Error type

pub mod banner;
pub mod cli;
pub mod error;
pub mod git;
pub mod identity;
pub mod manifest;
pub mod prompt;
pub mod readme;
