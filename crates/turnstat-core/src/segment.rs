use crate::error::ReadError;
use crate::parse::{is_sentinel, parse_line};
use crate::types::{Corpus, Dialogue, ReadStats, Turn};

/// Fold state for dialogue segmentation.
///
/// `pending` holds the turns of the dialogue in progress, `finished` the
/// dialogues closed so far. Each step consumes the state and returns the next
/// one; `finish` flushes any trailing turns.
#[derive(Debug, Default)]
pub struct Segmenter {
    pending: Vec<Turn>,
    finished: Vec<Dialogue>,
    stats: ReadStats,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line (1-based `line_no`, used for diagnostics).
    pub fn feed(mut self, line_no: usize, line: &str) -> Result<Self, ReadError> {
        self.stats.lines_read += 1;

        if line.trim().is_empty() {
            self.stats.blank_lines += 1;
            return Ok(self);
        }

        let parsed = parse_line(line).map_err(|source| ReadError::Format {
            line: line_no,
            source,
        })?;

        match parsed {
            Some(turn) => Ok(self.push(line_no, turn)),
            None => {
                tracing::debug!(line = line_no, "skipping line with fewer than 3 fields");
                self.stats.skipped_lines += 1;
                Ok(self)
            }
        }
    }

    /// Apply one parsed turn: close the pending dialogue on a sentinel,
    /// otherwise accumulate.
    pub fn push(mut self, line_no: usize, turn: Turn) -> Self {
        if !is_sentinel(&turn) {
            self.pending.push(turn);
            self.stats.turns_kept += 1;
            return self;
        }

        if self.pending.is_empty() {
            tracing::debug!(line = line_no, "dropping sentinel with no pending turns");
            self.stats.dropped_sentinels += 1;
            return self;
        }

        let turns = std::mem::take(&mut self.pending);
        self.finished.push(Dialogue {
            turns,
            overall_scores: turn.scores,
        });
        self.stats.sentinels += 1;
        self
    }

    /// Flush trailing turns as a final dialogue without overall scores.
    pub fn finish(mut self) -> Corpus {
        if !self.pending.is_empty() {
            self.finished.push(Dialogue {
                turns: self.pending,
                overall_scores: None,
            });
        }
        Corpus {
            dialogues: self.finished,
            stats: self.stats,
        }
    }
}

/// Segment an ordered line sequence into dialogues.
///
/// The first format error aborts the fold; no partial corpus is returned.
pub fn segment_lines<'a, I>(lines: I) -> Result<Corpus, ReadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let segmenter = lines
        .into_iter()
        .enumerate()
        .try_fold(Segmenter::new(), |seg, (idx, line)| seg.feed(idx + 1, line))?;
    Ok(segmenter.finish())
}
