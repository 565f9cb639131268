use super::entry::ScoreEntry;

/// Entries collected during one run, in entry order until sorted
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<ScoreEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }

    /// Longest time first; equal times keep their entry order.
    pub fn sort_by_time_desc(&mut self) {
        self.entries.sort_by(|a, b| b.seconds.cmp(&a.seconds));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ScoreEntry> for Ledger {
    fn from_iter<I: IntoIterator<Item = ScoreEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
