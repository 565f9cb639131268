//! Interactive score collection.

use std::num::IntErrorKind;

use tracing::debug;

use super::entry::ScoreEntry;
use super::file::ScoreFile;
use super::ledger::Ledger;
use crate::error::{Error, Result};

/// Printed once before the first prompt
pub const INSTRUCTIONS: &str = "Enter a blank score to exit the program";
pub const SCORE_PROMPT: &str = "Enter a new score: ";
pub const NAME_PROMPT: &str = "Enter a name: ";
/// Printed after the score file has been cleared
pub const CLEARED_MESSAGE: &str = "Scores deleted.";

/// Line-oriented input and output for the collection loop
pub trait ScorePrompter {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Display a message on its own line
    fn display_message(&mut self, message: &str) -> Result<()>;
}

/// What a line entered at the score prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCommand {
    /// Blank line: stop collecting and save
    Finish,
    /// `delete` in any ASCII case: clear the score file
    Clear,
    /// A time in seconds; a name is read next
    Score(i64),
}

impl ScoreCommand {
    pub fn parse(line: &str) -> Result<Self> {
        if line.is_empty() {
            return Ok(Self::Finish);
        }
        if line.eq_ignore_ascii_case("delete") {
            return Ok(Self::Clear);
        }
        let text = line.trim();
        let digits = strip_digit_separators(text);
        digits
            .as_deref()
            .unwrap_or(text)
            .parse::<i64>()
            .map(Self::Score)
            .map_err(|source| match source.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::ScoreOutOfRange {
                    input: line.to_string(),
                },
                _ => Error::InvalidScore {
                    input: line.to_string(),
                    source,
                },
            })
    }
}

/// Drop `_` separators that sit between two digits, as in `1_000`.
///
/// Returns `None` for a misplaced separator (`_1`, `1__0`, `1_`).
fn strip_digit_separators(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut after_digit = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            let before_digit = chars.peek().is_some_and(char::is_ascii_digit);
            if !after_digit || !before_digit {
                return None;
            }
            after_digit = false;
            continue;
        }
        after_digit = c.is_ascii_digit();
        out.push(c);
    }

    Some(out)
}

/// Read scores and commands until a blank score line.
///
/// Each score is followed by a name prompt and pushed onto `ledger`.
/// A `delete` command clears `file` immediately. The first unparseable
/// score or end of input aborts with an error and nothing is saved.
pub fn collect_scores<P: ScorePrompter>(
    prompter: &mut P,
    ledger: &mut Ledger,
    file: &ScoreFile,
) -> Result<()> {
    loop {
        let line = prompter
            .prompt_line(SCORE_PROMPT)?
            .ok_or(Error::UnexpectedEof)?;

        match ScoreCommand::parse(&line)? {
            ScoreCommand::Finish => break,
            ScoreCommand::Clear => {
                file.clear()?;
                prompter.display_message(CLEARED_MESSAGE)?;
            }
            ScoreCommand::Score(seconds) => {
                let name = prompter
                    .prompt_line(NAME_PROMPT)?
                    .ok_or(Error::UnexpectedEof)?;
                debug!(seconds, name = %name, "Recorded score");
                ledger.push(ScoreEntry::new(seconds, name));
            }
        }
    }

    Ok(())
}

/// One full tracker run: instructions, collection, then save.
///
/// Returns the saved ledger, sorted longest time first.
pub fn run_session<P: ScorePrompter>(prompter: &mut P, file: &ScoreFile) -> Result<Ledger> {
    prompter.display_message(INSTRUCTIONS)?;

    let mut ledger = Ledger::new();
    collect_scores(prompter, &mut ledger, file)?;
    file.save(&mut ledger)?;

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    struct ScriptedPrompter {
        input: VecDeque<String>,
        prompts: Vec<String>,
        messages: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|s| s.to_string()).collect(),
                prompts: Vec::new(),
                messages: Vec::new(),
            }
        }
    }

    impl ScorePrompter for ScriptedPrompter {
        fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.input.pop_front())
        }

        fn display_message(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    fn setup() -> (TempDir, ScoreFile) {
        let dir = TempDir::new().unwrap();
        let file = ScoreFile::new(dir.path().join("scores.txt"));
        (dir, file)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ScoreCommand::parse("").unwrap(), ScoreCommand::Finish);
        assert_eq!(ScoreCommand::parse("delete").unwrap(), ScoreCommand::Clear);
        assert_eq!(ScoreCommand::parse("DeLeTe").unwrap(), ScoreCommand::Clear);
        assert_eq!(ScoreCommand::parse("42").unwrap(), ScoreCommand::Score(42));
        assert_eq!(ScoreCommand::parse(" 7 ").unwrap(), ScoreCommand::Score(7));
        assert_eq!(ScoreCommand::parse("-5").unwrap(), ScoreCommand::Score(-5));
    }

    #[test]
    fn test_parse_digit_separators() {
        assert_eq!(ScoreCommand::parse("1_000").unwrap(), ScoreCommand::Score(1000));
        assert_eq!(ScoreCommand::parse("-1_2_3").unwrap(), ScoreCommand::Score(-123));
        assert_eq!(ScoreCommand::parse(" 6_0 ").unwrap(), ScoreCommand::Score(60));
    }

    #[test]
    fn test_parse_out_of_range() {
        for input in ["99999999999999999999", "-99999999999999999999"] {
            let err = ScoreCommand::parse(input).unwrap_err();
            assert!(
                matches!(&err, Error::ScoreOutOfRange { input: i } if i == input),
                "unexpected result for {input:?}: {err}"
            );
        }
        assert_eq!(
            ScoreCommand::parse("9223372036854775807").unwrap(),
            ScoreCommand::Score(i64::MAX)
        );
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for input in ["abc", "1.5", "   ", " delete", "10s", "_1", "1_", "1__0", "+_1", "_"] {
            let err = ScoreCommand::parse(input).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidScore { input: i, .. } if i == input),
                "unexpected result for {input:?}: {err}"
            );
        }
    }

    #[test]
    fn test_single_entry_session() {
        let (_dir, file) = setup();
        let mut prompter = ScriptedPrompter::new(&["10", "Al", ""]);

        let ledger = run_session(&mut prompter, &file).unwrap();

        let entries: Vec<&ScoreEntry> = ledger.iter().collect();
        assert_eq!(entries, [&ScoreEntry::new(10, "Al")]);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0:10 - Al\n");
        assert_eq!(prompter.messages, [INSTRUCTIONS]);
        assert_eq!(prompter.prompts, [SCORE_PROMPT, NAME_PROMPT, SCORE_PROMPT]);
    }

    #[test]
    fn test_blank_first_line_saves_nothing() {
        let (_dir, file) = setup();
        let mut prompter = ScriptedPrompter::new(&[""]);

        let ledger = run_session(&mut prompter, &file).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn test_invalid_score_aborts_before_save() {
        let (_dir, file) = setup();
        fs::write(file.path(), "0:03 - Old\n").unwrap();
        let mut prompter = ScriptedPrompter::new(&["10", "Al", "abc", "Bo", ""]);

        let err = run_session(&mut prompter, &file).unwrap_err();

        assert!(matches!(err, Error::InvalidScore { .. }));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0:03 - Old\n");
        // no name prompt for the rejected score
        assert_eq!(prompter.prompts.len(), 3);
    }

    #[test]
    fn test_delete_clears_immediately_and_continues() {
        let (_dir, file) = setup();
        fs::write(file.path(), "9:59 - Old\n").unwrap();
        let mut prompter = ScriptedPrompter::new(&["DELETE", "5", "Zed", ""]);

        run_session(&mut prompter, &file).unwrap();

        assert_eq!(prompter.messages, [INSTRUCTIONS, CLEARED_MESSAGE]);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0:05 - Zed\n");
    }

    #[test]
    fn test_delete_after_entries_keeps_ledger() {
        let (_dir, file) = setup();
        let mut prompter = ScriptedPrompter::new(&["20", "Al", "delete", "80", "Bo", ""]);

        run_session(&mut prompter, &file).unwrap();

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "1:20 - Bo\n0:20 - Al\n"
        );
    }

    #[test]
    fn test_eof_is_an_error() {
        let (_dir, file) = setup();

        let mut prompter = ScriptedPrompter::new(&["10", "Al"]);
        let err = run_session(&mut prompter, &file).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
        assert!(!file.path().exists());

        let mut prompter = ScriptedPrompter::new(&["10"]);
        let err = run_session(&mut prompter, &file).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn test_collect_pushes_in_entry_order() {
        let (_dir, file) = setup();
        let mut ledger = Ledger::new();
        let mut prompter = ScriptedPrompter::new(&["10", "Cy", "75", "Ann", ""]);

        collect_scores(&mut prompter, &mut ledger, &file).unwrap();

        let names: Vec<&str> = ledger.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Cy", "Ann"]);
        assert!(!file.path().exists());
    }
}
