use crate::error::ReadError;
use crate::segment::segment_lines;
use crate::types::Corpus;
use std::path::Path;

/// Read a corpus from an in-memory string.
pub fn read_from_text(text: &str) -> Result<Corpus, ReadError> {
    let corpus = segment_lines(text.trim().split('\n'))?;
    log_summary(&corpus);
    Ok(corpus)
}

/// Read a corpus from a UTF-8 file. The whole file is held in memory.
pub fn read_from_file(path: &Path) -> Result<Corpus, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = segment_lines(content.lines())?;
    log_summary(&corpus);
    Ok(corpus)
}

fn log_summary(corpus: &Corpus) {
    let s = &corpus.stats;
    tracing::info!(
        dialogues = corpus.dialogues.len(),
        turns = s.turns_kept,
        lines = s.lines_read,
        skipped = s.skipped_lines,
        dropped_sentinels = s.dropped_sentinels,
        "corpus read"
    );
}
