use serde::{Deserialize, Serialize};

/// One parsed utterance line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
    pub intent: String,
    /// `None` when the line had no score field or it held no tokens.
    /// Never `Some(vec![])`.
    pub scores: Option<Vec<i64>>,
}

/// An ordered run of turns closed by a sentinel or by end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub turns: Vec<Turn>,
    /// Scores carried by the closing sentinel. Always `None` for a dialogue
    /// flushed at end of input.
    pub overall_scores: Option<Vec<i64>>,
}

impl Dialogue {
    /// Iterate every score of every turn, skipping turns without scores.
    pub fn turn_scores(&self) -> impl Iterator<Item = i64> + '_ {
        self.turns
            .iter()
            .filter_map(|t| t.scores.as_deref())
            .flatten()
            .copied()
    }
}

/// Counters collected while segmenting a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub skipped_lines: usize,
    pub turns_kept: usize,
    pub sentinels: usize,
    pub dropped_sentinels: usize,
}

/// Result of a successful read: the finalized dialogues plus read counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub dialogues: Vec<Dialogue>,
    pub stats: ReadStats,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.dialogues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogues.is_empty()
    }
}
