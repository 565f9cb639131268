const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Count the characters of `word` whose lowercase form is in `a..=z`.
///
/// Despite the name every Latin letter counts, not only vowels.
pub fn count_vowels(word: &str) -> usize {
    word.chars()
        .filter(|c| LETTERS.contains(c.to_ascii_lowercase()))
        .count()
}
