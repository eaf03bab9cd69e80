use crate::config::Config;
use anyhow::Context;
use std::path::Path;
use turnstat_aggregate::{corpus_statistics, CorpusStatistics};

/// `turnstat stats <input>`
pub fn execute(input: &Path, json: bool, config: &Config) -> anyhow::Result<()> {
    let corpus = turnstat_core::read_from_file(input)
        .with_context(|| format!("reading corpus {}", input.display()))?;
    let stats = corpus_statistics(&corpus.dialogues, &config.scale);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", format_report(&stats));
    }
    Ok(())
}

fn format_report(stats: &CorpusStatistics) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\nDIALOGUE STATISTICS\n{rule}\n"));
    out.push_str(&format!("Total Dialogues: {}\n", stats.total_dialogues));
    out.push_str(&format!("Total Turns: {}\n", stats.total_turns));
    out.push_str(&format!(
        "Average Turns per Dialogue: {:?}\n",
        stats.average_turns_per_dialogue
    ));
    out.push_str(&format!(
        "\nOverall Average Score: {:?}\n",
        stats.overall_average_score
    ));
    if let Some(scaled) = stats.overall_average_score_100 {
        out.push_str(&format!("Overall Average Score (1-100): {scaled:?}\n"));
    }

    out.push_str("\nIndividual Dialogue Scores:\n");
    for (idx, score) in stats.dialogue_average_scores.iter().enumerate() {
        out.push_str(&format!("  Dialogue {}: {score:.2}\n", idx + 1));
    }

    out.push_str("\nIntent Distribution:\n");
    for entry in &stats.intent_distribution {
        out.push_str(&format!("  {}: {}\n", entry.intent, entry.count));
    }
    out.push_str(&format!("{rule}\n\n"));
    out
}
