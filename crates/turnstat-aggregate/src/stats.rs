use crate::scale::{round2, Scale};
use crate::score::{average, rescaled_average};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use turnstat_core::Dialogue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCount {
    pub intent: String,
    pub count: usize,
}

/// Corpus-wide rollup. Every field is zero, empty, or `None` for an empty
/// corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    pub total_dialogues: usize,
    pub total_turns: usize,
    /// Rounded to two decimals.
    pub average_turns_per_dialogue: f64,
    /// Descending count, ties in first-seen order.
    pub intent_distribution: Vec<IntentCount>,
    /// Unrounded, in dialogue order.
    pub dialogue_average_scores: Vec<f64>,
    /// Mean of `dialogue_average_scores`, rounded to two decimals.
    pub overall_average_score: f64,
    pub overall_average_score_100: Option<f64>,
}

pub fn corpus_statistics(dialogues: &[Dialogue], scale: &Scale) -> CorpusStatistics {
    let total_dialogues = dialogues.len();
    let total_turns: usize = dialogues.iter().map(|d| d.turns.len()).sum();

    let dialogue_average_scores: Vec<f64> = dialogues.iter().map(average).collect();
    let overall = if dialogue_average_scores.is_empty() {
        0.0
    } else {
        dialogue_average_scores.iter().sum::<f64>() / dialogue_average_scores.len() as f64
    };
    let average_turns = if total_dialogues == 0 {
        0.0
    } else {
        total_turns as f64 / total_dialogues as f64
    };

    CorpusStatistics {
        total_dialogues,
        total_turns,
        average_turns_per_dialogue: round2(average_turns),
        intent_distribution: intent_histogram(dialogues),
        dialogue_average_scores,
        overall_average_score: round2(overall),
        overall_average_score_100: rescaled_average(overall, scale),
    }
}

fn intent_histogram(dialogues: &[Dialogue]) -> Vec<IntentCount> {
    let mut counts: Vec<IntentCount> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for turn in dialogues.iter().flat_map(|d| d.turns.iter()) {
        match slots.get(turn.intent.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                slots.insert(turn.intent.as_str(), counts.len());
                counts.push(IntentCount {
                    intent: turn.intent.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
