//! Score ledger and score file handling.
//!
//! This module handles the interactive score tracker:
//!
//! - **Entries and ledger**: `(seconds, name)` pairs held for one run
//! - **Format**: one `M:SS - name` line per entry
//! - **Score file**: append-only `scores.txt` that can be cleared
//! - **Collection loop**: reads scores and commands through a [`ScorePrompter`]

mod collect;
mod entry;
mod file;
mod ledger;

pub use collect::{
    CLEARED_MESSAGE, INSTRUCTIONS, NAME_PROMPT, SCORE_PROMPT, ScoreCommand, ScorePrompter,
    collect_scores, run_session,
};
pub use entry::{ScoreEntry, format_entry, format_time};
pub use file::{DEFAULT_SCORE_FILE, ScoreFile};
pub use ledger::Ledger;
