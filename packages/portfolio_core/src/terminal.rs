//! The terminal playground's command interpreter.
//!
//! Commands are exact lower-cased matches over a fixed table; each returns a
//! fixed list of output lines. `clear` and `exit` additionally carry a
//! transcript action for the hosting widget. Unknown input is ordinary data
//! (a "command not found" line), never an error. Every line is handled in a
//! single synchronous pass.

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An echoed prompt line.
    Input,
    /// A line emitted by a command.
    Output,
}

/// One line of the terminal transcript. Append-only, cleared only by `clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl TranscriptEntry {
    pub fn input(content: impl Into<String>) -> Self {
        Self { kind: EntryKind::Input, content: content.into() }
    }

    pub fn output(content: impl Into<String>) -> Self {
        Self { kind: EntryKind::Output, content: content.into() }
    }
}

/// What the hosting widget must do with its transcript after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptAction {
    None,
    /// Empty the transcript immediately.
    Clear,
    /// Close the terminal; the closing notice is the final output line.
    Close,
}

/// Result of interpreting one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub action: TranscriptAction,
}

impl CommandOutcome {
    fn print(lines: Vec<String>) -> Self {
        Self { lines, action: TranscriptAction::None }
    }
}

/// Prompt shown before every echoed input line.
pub const PROMPT: &str = "~/portfolio$";

/// Banner printed when the terminal opens.
pub const WELCOME: &[&str] = &[
    "Welcome to Final Boss Terminal v1.0",
    "Type \"help\" for available commands",
];

const HELP: &[&str] = &[
    "Available commands:",
    "  about     - Learn about the developer",
    "  projects  - List all projects",
    "  skills    - Show technical skills",
    "  contact   - Get contact information",
    "  whoami    - Display current user info",
    "  clear     - Clear terminal",
    "  exit      - Close terminal",
];

const ABOUT: &[&str] = &[
    "Full Stack Developer & AI Enthusiast",
    "Specializing in bots, automation, and real-world solutions",
    "Building tools that work like magic but solve actual problems",
];

const PROJECTS: &[&str] = &[
    "Battle-Tested Projects:",
    "  1. Oracle GPT - Personal AI assistant with OpenAI API",
    "  2. School Portal System - Academic management platform",
    "  3. Telegram AI Assistant - Pocket AI for chat automation",
    "  4. Payment Link Generator - Secure Telegram bot payments",
    "  5. WhatsApp Auto Reply Bot - Smart business responder",
    "  6. Currency Tracker Bot - Real-time FX rate alerts",
    "",
    "Use \"project <name>\" for details on specific projects",
];

const SKILLS: &[&str] = &[
    "Technical Arsenal:",
    "  Languages: JavaScript, Python, PHP, Java",
    "  Frontend: React, HTML5, CSS3, Tailwind",
    "  Backend: Node.js, Express, Django",
    "  Databases: MongoDB, MySQL, Firebase",
    "  APIs: Telegram Bot API, WhatsApp API, OpenAI API",
    "  Tools: Git, VSCode, Postman, Docker",
];

const CONTACT: &[&str] = &[
    "Ready to build something amazing?",
    "  Email: developer@finalboss.dev",
    "  Telegram: @finalboss_dev",
    "  GitHub: github.com/finalboss",
    "  LinkedIn: linkedin.com/in/finalboss",
];

const WHOAMI: &[&str] = &[
    "finalboss@portfolio:~/projects$ whoami",
    "Final Boss Developer",
    "Builder of bots, systems & AI solutions",
    "Problem solver through code and automation",
];

/// Notice appended as the final line before the terminal closes.
pub const EXIT_NOTICE: &str = "Terminal session ended.";

const PROJECT_PREFIX: &str = "project ";

fn to_lines(table: &[&str]) -> Vec<String> {
    table.iter().map(|line| (*line).to_string()).collect()
}

/// Interpret one raw input line.
///
/// The line is trimmed and lower-cased for dispatch; the `project <name>`
/// acknowledgement keeps the argument verbatim from the trimmed original.
pub fn execute(raw: &str) -> CommandOutcome {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "" => CommandOutcome::print(Vec::new()),
        "help" => CommandOutcome::print(to_lines(HELP)),
        "about" => CommandOutcome::print(to_lines(ABOUT)),
        "projects" => CommandOutcome::print(to_lines(PROJECTS)),
        "skills" => CommandOutcome::print(to_lines(SKILLS)),
        "contact" => CommandOutcome::print(to_lines(CONTACT)),
        "whoami" => CommandOutcome::print(to_lines(WHOAMI)),
        "clear" => CommandOutcome { lines: Vec::new(), action: TranscriptAction::Clear },
        "exit" => CommandOutcome {
            lines: vec![EXIT_NOTICE.to_string()],
            action: TranscriptAction::Close,
        },
        _ if is_project_query(trimmed) => {
            let name = trimmed[PROJECT_PREFIX.len()..].trim();
            CommandOutcome::print(vec![
                format!("Project: {name}"),
                "For detailed project information, please visit the Projects section above.".to_string(),
                "Each project includes live demos, source code, and technical details.".to_string(),
            ])
        }
        _ => CommandOutcome::print(vec![
            format!("Command not found: {trimmed}"),
            "Type \"help\" for available commands".to_string(),
        ]),
    }
}

fn is_project_query(trimmed: &str) -> bool {
    trimmed
        .get(..PROJECT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PROJECT_PREFIX))
        && !trimmed[PROJECT_PREFIX.len()..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_return_their_tables() {
        assert_eq!(execute("help").lines, to_lines(HELP));
        assert_eq!(execute("about").lines, to_lines(ABOUT));
        assert_eq!(execute("projects").lines, to_lines(PROJECTS));
        assert_eq!(execute("skills").lines, to_lines(SKILLS));
        assert_eq!(execute("contact").lines, to_lines(CONTACT));
        assert_eq!(execute("whoami").lines, to_lines(WHOAMI));
    }

    #[test]
    fn command_names_are_trimmed_and_case_insensitive() {
        assert_eq!(execute("  HELP  ").lines, to_lines(HELP));
        assert_eq!(execute("\tWhoAmI\n").lines, to_lines(WHOAMI));
    }

    #[test]
    fn clear_empties_the_transcript() {
        let outcome = execute("clear");
        assert!(outcome.lines.is_empty());
        assert_eq!(outcome.action, TranscriptAction::Clear);

        // Simulate the widget applying the outcome: the transcript must be
        // empty immediately after execution.
        let mut transcript = vec![
            TranscriptEntry::output("Welcome"),
            TranscriptEntry::input(format!("{PROMPT} clear")),
        ];
        if outcome.action == TranscriptAction::Clear {
            transcript.clear();
        }
        assert!(transcript.is_empty());
    }

    #[test]
    fn exit_closes_with_the_notice_as_final_line() {
        let outcome = execute("exit");
        assert_eq!(outcome.action, TranscriptAction::Close);
        assert_eq!(outcome.lines, vec![EXIT_NOTICE.to_string()]);
        assert_eq!(outcome.lines.last().map(String::as_str), Some(EXIT_NOTICE));
    }

    #[test]
    fn empty_input_emits_nothing() {
        for raw in ["", "   ", "\t\n"] {
            let outcome = execute(raw);
            assert!(outcome.lines.is_empty(), "input {raw:?}");
            assert_eq!(outcome.action, TranscriptAction::None);
        }
    }

    #[test]
    fn project_prefix_acknowledges_the_argument_verbatim() {
        let outcome = execute("project Oracle GPT");
        assert_eq!(outcome.lines[0], "Project: Oracle GPT");
        assert_eq!(outcome.lines.len(), 3);
        assert_eq!(outcome.action, TranscriptAction::None);
    }

    #[test]
    fn bare_project_is_not_a_prefix_query() {
        let outcome = execute("project   ");
        assert_eq!(outcome.lines[0], "Command not found: project");
    }

    #[test]
    fn unknown_input_gets_not_found_plus_hint() {
        let outcome = execute("make me a sandwich");
        assert_eq!(outcome.lines.len(), 2);
        assert_eq!(outcome.lines[0], "Command not found: make me a sandwich");
        assert!(outcome.lines[1].contains("help"));
        assert_eq!(outcome.action, TranscriptAction::None);
    }

    #[test]
    fn help_mentions_every_command() {
        let help = execute("help").lines.join("\n");
        for name in ["about", "projects", "skills", "contact", "whoami", "clear", "exit"] {
            assert!(help.contains(name), "help is missing {name}");
        }
    }
}
