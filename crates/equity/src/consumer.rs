use crate::cancel::Cancel;
use crate::equities::Equities;
use crate::oracle::Oracle;
use crate::progress::Progress;
use runout_cards::*;
use tokio::sync::mpsc::Receiver;

/// Aggregation half of the pipeline.
///
/// Takes runouts one at a time, asks the [`Oracle`] who won, and folds the
/// answer into [`Equities`]. It is the only owner of the running totals, so
/// no locking is involved.
pub struct Consumer<'a, O: Oracle> {
    rx: Receiver<Hand>,
    oracle: &'a O,
    holes: &'a [Hole],
    equities: Equities,
    cancel: Cancel,
    progress: Progress,
}

impl<'a, O: Oracle> Consumer<'a, O> {
    pub fn new(
        rx: Receiver<Hand>,
        oracle: &'a O,
        holes: &'a [Hole],
        cancel: Cancel,
        progress: Progress,
    ) -> Self {
        Self {
            rx,
            oracle,
            holes,
            equities: Equities::new(holes.len()),
            cancel,
            progress,
        }
    }

    /// Drains the channel. `None` if cancellation cut the enumeration short;
    /// a cancel raised after the last runout was folded in is ignored.
    pub fn run(mut self) -> Option<Equities> {
        while let Some(runout) = self.rx.blocking_recv() {
            if self.cancel.is_cancelled() {
                break;
            }
            let winners = self.oracle.showdown(runout, self.holes);
            self.equities.absorb(&winners);
            self.progress.tick();
        }
        if !self.progress.is_finished() {
            log::warn!(
                "calculation cancelled after {} runouts",
                self.progress.complete()
            );
            None
        } else {
            log::info!(
                "{} runouts examined in {:.2?}",
                self.equities.total(),
                self.progress.elapsed()
            );
            Some(self.equities)
        }
    }
}
