use turnstat_aggregate::{average, round2};
use turnstat_core::Dialogue;

const RULE_WIDTH: usize = 80;

/// Human-readable report, one section per dialogue.
pub fn render_text(dialogues: &[Dialogue]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    for (idx, dialogue) in dialogues.iter().enumerate() {
        let avg = round2(average(dialogue));

        out.push_str(&format!("DIALOGUE {} (Average Score: {avg:.2})\n", idx + 1));
        out.push_str(&rule);
        out.push_str("\n\n");

        for turn in &dialogue.turns {
            out.push_str(&format!("{}: {}\n", turn.speaker, turn.text));
            match turn.scores.as_deref() {
                Some(scores) => out.push_str(&format!(
                    "[Intent: {} | Scores: {}]\n",
                    turn.intent,
                    join_scores(scores)
                )),
                None => out.push_str(&format!("[Intent: {}]\n", turn.intent)),
            }
            out.push('\n');
        }

        if let Some(overall) = dialogue.overall_scores.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(
                "OVERALL SCORES: {} (Average: {avg:.2})\n",
                join_scores(overall)
            ));
        }

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n\n");
    }

    out
}

fn join_scores(scores: &[i64]) -> String {
    scores
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
