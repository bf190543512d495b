use std::io::{BufRead, Write};

use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Abstraction over a string input prompt.
///
/// Implementors define how string input is collected from the user,
/// including any styling or interactivity. This trait enables testability
/// by decoupling user input from the logic that consumes it.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Value returned when the user enters nothing. An empty
    ///   default means the question is optional and an empty answer is fine.
    ///
    /// # Returns
    /// `Ok(String)` if input is successfully collected, or an `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String>;
}

/// Abstraction over a boolean (yes/no) confirmation prompt.
///
/// This trait allows interactive confirmation to be injected or mocked,
/// promoting testability in CLI workflows.
pub trait ConfirmPrompter {
    /// Prompt the user for a yes/no confirmation.
    ///
    /// # Parameters
    /// - `prompt`: The confirmation message.
    /// - `default`: The default answer if the user presses Enter.
    ///
    /// # Returns
    /// `Ok(true)` if confirmed, `Ok(false)` if declined, or `Err(String)` on input failure.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String>;
}

/// Terminal implementation of both prompt traits using `dialoguer`.
///
/// Uses the `ColorfulTheme` for user-friendly styling. Needs a real terminal;
/// use [`LinePrompter`] when input is piped.
pub struct DialoguerPrompter;

impl StringPrompter for DialoguerPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
        if default.is_empty() {
            input = input.allow_empty(true);
        } else {
            input = input.default(default.to_string());
        }
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl ConfirmPrompter for DialoguerPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let theme = ColorfulTheme::default();
        let confirm = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .wait_for_newline(true);
        match confirm.interact() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Line-oriented implementation of both prompt traits.
///
/// Writes the question to `output` and reads a single line from `input`.
/// End of input counts as an empty answer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    /// Gives back the output sink, e.g. to inspect the questions asked.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, question: &str) -> Result<String, String> {
        let written = write!(self.output, "{}", question).and_then(|_| self.output.flush());
        if let Err(e) = written {
            return Err(e.to_string());
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl<R: BufRead, W: Write> StringPrompter for LinePrompter<R, W> {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let question = if default.is_empty() {
            format!("{}: ", prompt)
        } else {
            format!("{} ({}): ", prompt, default)
        };
        let answer = self.read_answer(&question)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

impl<R: BufRead, W: Write> ConfirmPrompter for LinePrompter<R, W> {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.read_answer(&format!("{} ({}): ", prompt, hint))?;
        if answer.is_empty() {
            Ok(default)
        } else {
            Ok(is_affirmative(&answer))
        }
    }
}

/// `y` or `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Ask for the project name, offering `suggested` as the default.
///
/// The answer is trimmed; an empty answer selects `suggested`.
pub fn ask_project_name<P: StringPrompter>(
    prompter: &mut P,
    suggested: &str,
) -> Result<String, String> {
    let answer = prompter.prompt("Project name", suggested)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(suggested.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Ask an optional free-text question. Returns `""` when skipped.
///
/// The prompt reads `"<label> (optional)"`.
pub fn ask_optional<P: StringPrompter>(prompter: &mut P, label: &str) -> Result<String, String> {
    let prompt = format!("{} (optional)", label);
    prompter.prompt(&prompt, "").map(|v| v.trim().to_string())
}

/// Ask whether to wipe the existing git history. Defaults to no.
pub fn confirm_git_reinit<P: ConfirmPrompter>(prompter: &mut P) -> Result<bool, String> {
    prompter.confirm("Reinitialize git history?", false)
}

/// Ask whether to drop the `script` entry from the root `package.json`.
/// Defaults to no.
pub fn confirm_cleanup<P: ConfirmPrompter>(prompter: &mut P, script: &str) -> Result<bool, String> {
    let prompt = format!("Remove {} script from package.json?", script);
    prompter.confirm(&prompt, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct MockStringPrompter {
        pub response: Result<String, String>,
        pub expected_prompt: String,
        pub expected_default: String,
    }

    impl StringPrompter for MockStringPrompter {
        fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
            assert_eq!(prompt, self.expected_prompt);
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    struct MockConfirmPrompter {
        pub response: Result<bool, String>,
        pub expected_prompt: String,
        pub expected_default: bool,
    }

    impl ConfirmPrompter for MockConfirmPrompter {
        fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
            assert_eq!(prompt, self.expected_prompt);
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    fn lines(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_project_name_returns_user_input() {
        let mut prompter = MockStringPrompter {
            response: Ok("  rocket-shop ".to_string()),
            expected_prompt: "Project name".to_string(),
            expected_default: "my-project".to_string(),
        };
        let result = ask_project_name(&mut prompter, "my-project");
        assert_eq!(result.unwrap(), "rocket-shop");
    }

    #[test]
    fn test_ask_project_name_blank_uses_suggestion() {
        let mut prompter = MockStringPrompter {
            response: Ok("   ".to_string()),
            expected_prompt: "Project name".to_string(),
            expected_default: "my-project".to_string(),
        };
        let result = ask_project_name(&mut prompter, "my-project");
        assert_eq!(result.unwrap(), "my-project");
    }

    #[test]
    fn test_ask_optional_prompt_and_trim() {
        let mut prompter = MockStringPrompter {
            response: Ok(" A tool\t".to_string()),
            expected_prompt: "Description (optional)".to_string(),
            expected_default: "".to_string(),
        };
        let result = ask_optional(&mut prompter, "Description");
        assert_eq!(result.unwrap(), "A tool");
    }

    #[test]
    fn test_ask_optional_returns_error() {
        let mut prompter = MockStringPrompter {
            response: Err("input failed".to_string()),
            expected_prompt: "Author (optional)".to_string(),
            expected_default: "".to_string(),
        };
        assert!(ask_optional(&mut prompter, "Author").is_err());
    }

    #[test]
    fn test_confirm_git_reinit_defaults_to_no() {
        let mut prompter = MockConfirmPrompter {
            response: Ok(false),
            expected_prompt: "Reinitialize git history?".to_string(),
            expected_default: false,
        };
        assert_eq!(confirm_git_reinit(&mut prompter).unwrap(), false);
    }

    #[test]
    fn test_confirm_cleanup_names_script() {
        let mut prompter = MockConfirmPrompter {
            response: Ok(true),
            expected_prompt: "Remove init-project script from package.json?".to_string(),
            expected_default: false,
        };
        assert_eq!(confirm_cleanup(&mut prompter, "init-project").unwrap(), true);
    }

    #[test]
    fn test_confirm_cleanup_error() {
        let mut prompter = MockConfirmPrompter {
            response: Err("confirm failed".to_string()),
            expected_prompt: "Remove init-project script from package.json?".to_string(),
            expected_default: false,
        };
        assert!(confirm_cleanup(&mut prompter, "init-project").is_err());
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", "Yes", " y "] {
            assert!(is_affirmative(answer), "{answer:?} should be yes");
        }
        for answer in ["", "n", "no", "yep", "ye", "true", "1"] {
            assert!(!is_affirmative(answer), "{answer:?} should be no");
        }
    }

    #[test]
    fn line_prompter_reads_one_line_per_question() {
        let mut prompter = lines("rocket\n\n  Ada Lovelace  \n");
        assert_eq!(prompter.prompt("Project name", "my-project").unwrap(), "rocket");
        assert_eq!(prompter.prompt("Description (optional)", "").unwrap(), "");
        assert_eq!(prompter.prompt("Author (optional)", "").unwrap(), "Ada Lovelace");

        let shown = String::from_utf8(prompter.output).unwrap();
        assert_eq!(
            shown,
            "Project name (my-project): Description (optional): Author (optional): "
        );
    }

    #[test]
    fn line_prompter_empty_answer_uses_default() {
        let mut prompter = lines("\n");
        assert_eq!(prompter.prompt("Project name", "my-project").unwrap(), "my-project");
    }

    #[test]
    fn line_prompter_end_of_input_is_empty_answer() {
        let mut prompter = lines("");
        assert_eq!(prompter.prompt("Author (optional)", "").unwrap(), "");
        assert_eq!(prompter.confirm("Proceed?", false).unwrap(), false);
    }

    #[test]
    fn line_prompter_confirm_parses_answers() {
        let mut prompter = lines("YES\nnope\ny\n");
        assert_eq!(prompter.confirm("A?", false).unwrap(), true);
        assert_eq!(prompter.confirm("B?", true).unwrap(), false);
        assert_eq!(prompter.confirm("C?", false).unwrap(), true);

        let shown = String::from_utf8(prompter.output).unwrap();
        assert_eq!(shown, "A? (y/N): B? (Y/n): C? (y/N): ");
    }
}
