mod scale;
mod score;
mod stats;

pub use scale::{rescale, round2, Scale};
pub use score::{average, rescaled_average};
pub use stats::{corpus_statistics, CorpusStatistics, IntentCount};
