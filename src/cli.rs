use crate::{
    banner::{print_banner, print_next_steps},
    error::SetupError,
    git,
    identity::{self, ProjectIdentity},
    manifest::{self, FileOutcome},
    prompt::{self, ConfirmPrompter, DialoguerPrompter, LinePrompter, StringPrompter},
    readme,
};

use console::{Term, style};
use std::{
    env,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

/// Where a setup run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// Repository root that all target paths are relative to.
    pub root: PathBuf,
    /// README template rendered into `<root>/README.md`.
    pub template: PathBuf,
}

impl SetupOptions {
    /// Options rooted at `root` with the template at its usual place.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let template = root.join(readme::TEMPLATE_PATH);
        SetupOptions { root, template }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Version,
    Run(SetupOptions),
}

/// Parses arguments (without the program name) relative to `cwd`.
fn parse_args(args: &[String], cwd: &Path) -> Result<Invocation, SetupError> {
    let mut root: Option<PathBuf> = None;
    let mut template: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "--root" | "--template" => {
                let value = match iter.next() {
                    Some(v) => v,
                    None => return Err(SetupError::Usage(format!("{} requires a value", arg))),
                };
                if arg == "--root" {
                    root = Some(cwd.join(value));
                } else {
                    template = Some(cwd.join(value));
                }
            }
            other => {
                if let Some(value) = other.strip_prefix("--root=") {
                    root = Some(cwd.join(value));
                } else if let Some(value) = other.strip_prefix("--template=") {
                    template = Some(cwd.join(value));
                } else {
                    return Err(SetupError::Usage(format!("unknown argument `{}`", other)));
                }
            }
        }
    }

    let mut options = SetupOptions::for_root(root.unwrap_or_else(|| cwd.to_path_buf()));
    if let Some(t) = template {
        options.template = t;
    }
    Ok(Invocation::Run(options))
}

/// Prints the per-file notice for a rewrite.
fn report(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Updated(path) => {
            println!("  {}", style(format!("Updated {}", path.display())).green());
        }
        FileOutcome::Skipped(path) => {
            println!(
                "  {}",
                style(format!("Skipping {} (not found)", path.display())).yellow()
            );
        }
        FileOutcome::Unchanged(path) => {
            println!(
                "  {}",
                style(format!("No changes needed in {}", path.display())).yellow()
            );
        }
    }
}

/// Collects and validates the project answers.
///
/// The name is validated before the optional questions are asked, so an
/// invalid name stops the run without touching any file.
fn get_identity<P: StringPrompter>(
    prompter: &mut P,
    suggested: &str,
) -> Result<ProjectIdentity, SetupError> {
    let name = prompt::ask_project_name(prompter, suggested).map_err(SetupError::Prompt)?;
    identity::validate_name(&name)?;

    let description = prompt::ask_optional(prompter, "Description").map_err(SetupError::Prompt)?;
    let author = prompt::ask_optional(prompter, "Author").map_err(SetupError::Prompt)?;

    ProjectIdentity::new(&name, &description, &author)
}

/// Rewrites every manifest and the README for `identity`.
fn update_project_files(
    options: &SetupOptions,
    identity: &ProjectIdentity,
) -> Result<(), SetupError> {
    let root = &options.root;

    let outcome = manifest::update_json_file(
        &root.join(manifest::ROOT_MANIFEST),
        manifest::root_updates(identity),
    )?;
    report(&outcome);

    let outcome = manifest::update_json_file(
        &root.join(manifest::WEB_MANIFEST),
        manifest::app_updates(identity, "web", "Web Frontend"),
    )?;
    report(&outcome);

    let outcome = manifest::update_json_file(
        &root.join(manifest::API_MANIFEST),
        manifest::app_updates(identity, "api", "API Backend"),
    )?;
    report(&outcome);

    let outcome = manifest::update_pyproject(&root.join(manifest::API_PYPROJECT), &identity.name)?;
    report(&outcome);

    let outcome = readme::generate(root, &options.template, identity)?;
    report(&outcome);

    Ok(())
}

/// Runs the whole setup flow against `options.root`.
///
/// Order: project name (validated), description, author, git confirmation
/// (only when `.git` exists), file rewrites, git reset, cleanup confirmation.
///
/// # Errors
///
/// Stops at the first failure; files already rewritten stay rewritten.
pub fn run_setup<P>(
    prompter: &mut P,
    options: &SetupOptions,
    suggested: &str,
) -> Result<(), SetupError>
where
    P: StringPrompter + ConfirmPrompter,
{
    let identity = get_identity(prompter, suggested)?;

    let reinit_git = if git::has_repository(&options.root) {
        prompt::confirm_git_reinit(prompter).map_err(SetupError::Prompt)?
    } else {
        false
    };

    print_banner(&identity, reinit_git);

    println!("{}", style("📝 Updating project files...").cyan().bold());
    update_project_files(options, &identity)?;

    if reinit_git {
        println!();
        println!("{}", style("🔄 Reinitializing git...").cyan().bold());
        git::reinitialize(&options.root)?;
    }

    println!();
    let remove = prompt::confirm_cleanup(prompter, manifest::SETUP_SCRIPT)
        .map_err(SetupError::Prompt)?;
    if remove {
        let path = options.root.join(manifest::ROOT_MANIFEST);
        match manifest::remove_script(&path, manifest::SETUP_SCRIPT)? {
            FileOutcome::Updated(_) => println!(
                "  {}",
                style(format!(
                    "Removed {} script from package.json",
                    manifest::SETUP_SCRIPT
                ))
                .green()
            ),
            other => report(&other),
        }
    }

    print_next_steps();
    Ok(())
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
project-setup {}

Turn a fresh template checkout into your own project.

USAGE:
    project-setup [OPTIONS]

OPTIONS:
    -h, --help               Print help information
    -V, --version            Print version information
    --root <DIR>             Repository root to set up (default: current directory)
    --template <FILE>        README template (default: <root>/{})

DESCRIPTION:
    Asks for a project name, description and author, then rewrites
    package.json, apps/web/package.json, apps/api/package.json,
    apps/api/pyproject.toml and README.md. Missing files are skipped.
    Optionally replaces the git history with a single commit and removes
    the `{}` script from package.json.

    Answers are read line by line when standard input is not a terminal.",
        env!("CARGO_PKG_VERSION"),
        readme::TEMPLATE_PATH,
        manifest::SETUP_SCRIPT,
    );
}

/// Main CLI entry point for `project-setup`.
///
/// This function:
/// 1. Parses `--help`, `--version`, `--root` and `--template`.
/// 2. Suggests a project name from the current directory.
/// 3. Picks a terminal prompter, or a line prompter when stdin is piped.
/// 4. Runs [`run_setup`].
///
/// # Exit Codes
///
/// * `0` – Successful execution, help or version.
/// * Non-zero – via [`SetupError::exit_code`].
pub fn entry() -> Result<i32, SetupError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cwd = env::current_dir().map_err(|e| SetupError::io(".", e))?;

    let options = match parse_args(&args, &cwd)? {
        Invocation::Help => {
            print_help();
            return Ok(0);
        }
        Invocation::Version => {
            println!("project-setup {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }
        Invocation::Run(options) => options,
    };

    let suggested = identity::suggest_name(&cwd);

    println!();
    println!("{}", style("🚀 Project Setup").cyan().bold());
    println!();

    let stdin = io::stdin();
    if stdin.is_terminal() && Term::stderr().is_term() {
        let mut prompter = DialoguerPrompter;
        run_setup(&mut prompter, &options, &suggested)?;
    } else {
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        run_setup(&mut prompter, &options, &suggested)?;
    }

    Ok(0)
}
