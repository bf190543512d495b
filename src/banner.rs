use console::{measure_text_width, style};
use std::iter;

use crate::identity::ProjectIdentity;

/// Commands suggested once setup has finished.
pub const NEXT_STEPS: [&str; 4] = [
    "pnpm install",
    "cp apps/web/.env.example apps/web/.env",
    "cp apps/api/.env.example apps/api/.env",
    "pnpm dev",
];

/// Prints a colorized, boxed summary of what the setup run is about to do.
///
/// The box is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so that ANSI color codes inside the
/// content do not throw off the padding. Borders are styled independently
/// from the inner text.
///
/// # Parameters
///
/// * `identity` – The validated project answers.
/// * `reinit_git` – Whether the git history will be replaced.
///
/// # Examples
///
/// ```no_run
/// use project_setup::{banner::print_banner, identity::ProjectIdentity};
///
/// let identity = ProjectIdentity::new("rocket", "", "").unwrap();
/// print_banner(&identity, false);
/// ```
pub fn print_banner(identity: &ProjectIdentity, reinit_git: bool) {
    let lines = banner_lines(identity, reinit_git);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l)) // ignore ANSI in content
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible; // includes the one space after left border
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Builds the banner content: title, the three answers, then the git plan.
///
/// Skipped optional answers are shown dimmed as `(unchanged)`. Lines may
/// contain ANSI styling, so measure them with
/// `console::measure_text_width` rather than `str::len()`.
fn banner_lines(identity: &ProjectIdentity, reinit_git: bool) -> Vec<String> {
    let top = ["About to update project files", ""].into_iter().map(|s| s.to_string());

    let field = |label: &str, value: &str| {
        if value.is_empty() {
            format!("{:<13}{}", label, style("(unchanged)").dim())
        } else {
            format!("{:<13}{}", label, style(value).cyan().bold())
        }
    };

    let answers = [
        field("Name:", &identity.name),
        field("Description:", &identity.description),
        field("Author:", &identity.author),
    ]
    .into_iter();

    let git = if reinit_git {
        style("Git history will be replaced by a single commit.")
            .yellow()
            .bold()
            .to_string()
    } else {
        String::from("Git history is kept as-is.")
    };

    let bottom = iter::once(String::new()).chain(iter::once(git));

    top.chain(answers).chain(bottom).collect()
}

/// Prints the closing success message and the next-steps list.
pub fn print_next_steps() {
    println!();
    println!("{}", style("✅ Setup complete!").green().bold());
    println!();
    println!("{}", style("Next steps:").bold());
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}
