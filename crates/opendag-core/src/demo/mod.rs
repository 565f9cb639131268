//! Array and text demo routines.
//!
//! - **Sort**: an adjacent-comparison sort that writes two slots ahead
//! - **Letter count**: counts ASCII letters in a word

mod sort;
mod text;

pub use sort::bubble_sort;
pub use text::count_vowels;

/// Line printed before any demo output
pub const WELCOME_LINE: &str = "Welkom, bij de opendag van Universiteit Leiden";

/// Array handed to [`bubble_sort`] by the demo program
pub const DEMO_ARRAY: [i64; 14] = [6, 16, 2, 9, 5, 7, 1, 1, 1, 10, 88, 5, 2, 100];

/// Word handed to [`count_vowels`] by the demo program
pub const DEMO_WORD: &str = "HOttentottEntentententoOnstellIng";

/// Lowercase spelling of the demo word; not used by the demo program itself
pub const DEMO_WORD_ALT: &str = "Hottentottentententoonstelling";
