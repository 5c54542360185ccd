use crate::cancel::Cancel;
use crate::consumer::Consumer;
use crate::equities::Equities;
use crate::oracle::Oracle;
use crate::producer::Producer;
use crate::progress::Progress;
use crate::runouts::Runouts;
use crate::table::Table;
use runout_cards::Hand;

/// One exact equity calculation over a validated [`Table`].
///
/// Runs a [`Producer`] on a scoped worker thread and a [`Consumer`] on the
/// calling thread, joined by a channel with a single slot: the producer is
/// never more than one runout ahead, whatever the size of the enumeration.
///
/// Blocks the calling thread. From async code, call it inside
/// `tokio::task::spawn_blocking`.
pub struct Calculation {
    table: Table,
    cancel: Cancel,
}

impl From<Table> for Calculation {
    fn from(table: Table) -> Self {
        Self {
            table,
            cancel: Cancel::new(),
        }
    }
}

impl Calculation {
    pub fn new(table: Table) -> Self {
        Self::from(table)
    }
    pub fn with_cancel(self, cancel: Cancel) -> Self {
        Self { cancel, ..self }
    }
    /// handle that stops this calculation from any thread
    pub fn cancel(&self) -> Cancel {
        self.cancel.clone()
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn runouts(&self) -> Runouts {
        Runouts::from(&self.table)
    }

    /// Enumerates every runout and aggregates the oracle's verdicts.
    /// `None` if cancelled before the enumeration was exhausted.
    pub fn run<O: Oracle>(&self, oracle: &O) -> Option<Equities> {
        let runouts = self.runouts();
        let total = runouts.combinations();
        log::debug!("table    {}", self.table);
        log::debug!("missing  {} cards", runouts.missing());
        log::debug!("runouts  {}", total);
        let (tx, rx) = tokio::sync::mpsc::channel::<Hand>(1);
        std::thread::scope(|scope| {
            let producer = Producer::new(runouts, tx, self.cancel.clone());
            let producer = scope.spawn(move || producer.run());
            let equities = Consumer::new(
                rx,
                oracle,
                self.table.holes(),
                self.cancel.clone(),
                Progress::new(total),
            )
            .run();
            let sent = producer
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            if let Some(ref equities) = equities {
                debug_assert_eq!(sent, equities.total());
                debug_assert_eq!(total, equities.total());
            }
            equities
        })
    }
}
