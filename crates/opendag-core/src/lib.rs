//! # opendag-core
//!
//! Core library for the open day demo programs.
//!
//! This crate provides:
//! - The array/text demo routines (sort and letter counting)
//! - The score ledger, its line format and the `scores.txt` file handling
//! - The interactive score collection loop behind the `ScorePrompter` seam

pub mod demo;
pub mod error;
pub mod score;

pub use demo::{DEMO_ARRAY, DEMO_WORD, DEMO_WORD_ALT, WELCOME_LINE, bubble_sort, count_vowels};
pub use error::{Error, Result};
pub use score::{
    CLEARED_MESSAGE, DEFAULT_SCORE_FILE, INSTRUCTIONS, Ledger, NAME_PROMPT, SCORE_PROMPT,
    ScoreCommand, ScoreEntry, ScoreFile, ScorePrompter, collect_scores, format_entry,
    format_time, run_session,
};
