use crate::config::Config;
use anyhow::Context;
use std::path::{Path, PathBuf};
use turnstat_export::OutputFormat;

pub struct ConvertParams<'a> {
    pub input: &'a Path,
    pub out_dir: Option<&'a Path>,
    pub formats: &'a [OutputFormat],
    pub compact: bool,
}

/// Read `input` and write each requested rendering. Returns written paths in
/// format order.
pub fn execute(params: &ConvertParams<'_>, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let corpus = turnstat_core::read_from_file(params.input)
        .with_context(|| format!("converting {}", params.input.display()))?;
    let dialogues = &corpus.dialogues;

    let out_dir = params.out_dir.unwrap_or(config.output_dir.as_path());
    let pretty = config.pretty && !params.compact;

    let mut written = Vec::with_capacity(params.formats.len());
    for &format in params.formats {
        let path = turnstat_store::output_path(out_dir, config.file_name(format))?;
        match format {
            OutputFormat::Text => turnstat_export::write_text(&path, dialogues)?,
            OutputFormat::Records => {
                turnstat_export::write_records(&path, dialogues, &config.scale, pretty)?
            }
            OutputFormat::Chat => turnstat_export::write_chat(&path, dialogues, &config.scale)?,
        }
        println!("Saved {} format to {}", format.label(), path.display());
        written.push(path);
    }

    if corpus.is_empty() {
        tracing::warn!(input = %params.input.display(), "no dialogues found");
    }
    println!("Total dialogues: {}", corpus.len());
    if corpus.stats.skipped_lines > 0 || corpus.stats.dropped_sentinels > 0 {
        println!(
            "({} malformed lines skipped, {} empty OVERALL markers dropped)",
            corpus.stats.skipped_lines, corpus.stats.dropped_sentinels
        );
    }
    Ok(written)
}
