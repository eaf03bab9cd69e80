use serde::{Deserialize, Serialize};
use turnstat_aggregate::{average, rescaled_average, round2, Scale};
use turnstat_core::{Dialogue, Turn};

/// Intent label that carries no information on its own.
const NEUTRAL_INTENT: &str = "OTHER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDocument {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: usize,
    pub messages: Vec<ChatMessage>,
    pub overall_scores: Option<Vec<i64>>,
    pub average_score: f64,
    pub average_score_100: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub intent: String,
    pub scores: Option<Vec<i64>>,
}

/// Role-tagged rendering: `USER` turns become `user`, everything else
/// `assistant`.
pub fn build_chat(dialogues: &[Dialogue], scale: &Scale) -> ChatDocument {
    let conversations = dialogues
        .iter()
        .enumerate()
        .map(|(idx, dialogue)| {
            let avg = average(dialogue);
            Conversation {
                conversation_id: idx + 1,
                messages: dialogue.turns.iter().map(to_message).collect(),
                overall_scores: dialogue.overall_scores.clone(),
                average_score: round2(avg),
                average_score_100: rescaled_average(avg, scale),
            }
        })
        .collect();

    ChatDocument { conversations }
}

fn to_message(turn: &Turn) -> ChatMessage {
    let role = if turn.speaker == "USER" {
        "user"
    } else {
        "assistant"
    };

    let metadata = (turn.intent != NEUTRAL_INTENT || turn.scores.is_some()).then(|| {
        MessageMetadata {
            intent: turn.intent.clone(),
            scores: turn.scores.clone(),
        }
    });

    ChatMessage {
        role: role.to_string(),
        content: turn.text.clone(),
        metadata,
    }
}
