/// One recorded time and the name it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub seconds: i64,
    pub name: String,
}

impl ScoreEntry {
    pub fn new(seconds: i64, name: impl Into<String>) -> Self {
        Self {
            seconds,
            name: name.into(),
        }
    }
}

/// Render seconds as `M:SS`; minutes are unpadded and unbounded.
pub fn format_time(seconds: i64) -> String {
    format!("{}:{:02}", seconds.div_euclid(60), seconds.rem_euclid(60))
}

/// Render an entry as a score file line, without the trailing newline
pub fn format_entry(entry: &ScoreEntry) -> String {
    format!("{} - {}", format_time(entry.seconds), entry.name)
}
