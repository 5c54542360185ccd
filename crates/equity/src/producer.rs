use crate::cancel::Cancel;
use crate::runouts::Runouts;
use runout_cards::Hand;
use runout_core::Count;
use std::ops::ControlFlow;
use tokio::sync::mpsc::Sender;

/// Generation half of the pipeline.
///
/// Walks [`Runouts`] and hands each one to the consumer, blocking until the
/// single channel slot frees up. Stops early if cancelled or if the consumer
/// hangs up.
pub struct Producer {
    runouts: Runouts,
    tx: Sender<Hand>,
    cancel: Cancel,
}

impl Producer {
    pub fn new(runouts: Runouts, tx: Sender<Hand>, cancel: Cancel) -> Self {
        Self { runouts, tx, cancel }
    }

    /// Returns how many runouts were handed off.
    pub fn run(self) -> Count {
        let mut sent = 0 as Count;
        let flow = self.runouts.visit(|runout| {
            if self.cancel.is_cancelled() {
                return ControlFlow::Break(());
            }
            match self.tx.blocking_send(runout) {
                Ok(()) => {
                    sent += 1;
                    ControlFlow::Continue(())
                }
                Err(_) => ControlFlow::Break(()),
            }
        });
        if flow.is_break() {
            log::debug!("producer stopped after {} runouts", sent);
        }
        sent
    }
}
