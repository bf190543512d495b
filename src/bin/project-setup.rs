use console::style;
use project_setup::error::SetupError;

/// Entry point for the `project-setup` binary.
///
/// Delegates to the CLI entry function and exits the process with the
/// returned exit code. On error, prints it to stderr and exits with the
/// error's code (1 unless the command line itself was bad).
fn main() {
    match project_setup::cli::entry() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let message = match &e {
                SetupError::InvalidName(_) | SetupError::Usage(_) => format!("❌ {}", e),
                _ => format!("Setup failed: {}", e),
            };
            eprintln!();
            eprintln!("{}", style(message).red().bold());
            std::process::exit(e.exit_code());
        }
    }
}
