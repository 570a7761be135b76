use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `Network::fit` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data;
///                   the loop always runs all of them, there is no early
///                   stopping
/// - `log_every`   — emit a `log::debug!` line every N completed epochs;
///                   `0` disables epoch logging
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver never stops
///                   training: send failures are ignored.
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with logging off and no progress
    /// channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: 0,
            progress_tx: None,
        }
    }
}
