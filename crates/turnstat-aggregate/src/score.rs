use crate::scale::{round2, Scale};
use turnstat_core::Dialogue;

/// Average score of a dialogue.
///
/// Uses the sentinel's overall scores when present and non-empty, otherwise
/// the flattened per-turn scores. No score evidence at all gives `0.0`.
pub fn average(dialogue: &Dialogue) -> f64 {
    if let Some(overall) = dialogue.overall_scores.as_deref() {
        if !overall.is_empty() {
            return mean(overall.iter().copied());
        }
    }
    mean(dialogue.turn_scores())
}

/// Rescaled average rounded to two decimals, or `None` when the average is
/// exactly zero. A zero average and missing score evidence share the marker.
pub fn rescaled_average(average: f64, scale: &Scale) -> Option<f64> {
    if average == 0.0 {
        None
    } else {
        Some(round2(scale.apply(average)))
    }
}

// Summed as i128: any realistic count of i64 scores fits without overflow.
fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, n), v| {
        (s + i128::from(v), n + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
