use serde::{Deserialize, Serialize};
use turnstat_aggregate::{average, rescaled_average, round2, Scale};
use turnstat_core::Dialogue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDocument {
    pub total_dialogues: usize,
    pub dialogues: Vec<DialogueRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub dialogue_id: usize,
    pub turns: Vec<TurnRecord>,
    pub overall_scores: Option<Vec<i64>>,
    pub average_score: f64,
    /// `None` when `average_score` is exactly zero.
    pub average_score_100: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn_id: usize,
    pub speaker: String,
    pub text: String,
    pub intent: String,
    pub scores: Option<Vec<i64>>,
}

/// Nested per-dialogue / per-turn record document. Ids are 1-based.
pub fn build_records(dialogues: &[Dialogue], scale: &Scale) -> RecordDocument {
    let records = dialogues
        .iter()
        .enumerate()
        .map(|(idx, dialogue)| {
            let avg = average(dialogue);
            DialogueRecord {
                dialogue_id: idx + 1,
                turns: dialogue
                    .turns
                    .iter()
                    .enumerate()
                    .map(|(t_idx, turn)| TurnRecord {
                        turn_id: t_idx + 1,
                        speaker: turn.speaker.clone(),
                        text: turn.text.clone(),
                        intent: turn.intent.clone(),
                        scores: turn.scores.clone(),
                    })
                    .collect(),
                overall_scores: dialogue.overall_scores.clone(),
                average_score: round2(avg),
                average_score_100: rescaled_average(avg, scale),
            }
        })
        .collect();

    RecordDocument {
        total_dialogues: dialogues.len(),
        dialogues: records,
    }
}
