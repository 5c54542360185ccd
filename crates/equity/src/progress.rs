use runout_core::Count;
use runout_core::PROGRESS_CHECKPOINT;
use std::time::Instant;

/// Logs throughput of a long enumeration every [`PROGRESS_CHECKPOINT`] runouts.
pub struct Progress {
    begin: Instant,
    delta: Instant,
    complete: Count,
    total: Count,
}

impl Progress {
    pub fn new(total: Count) -> Self {
        let now = Instant::now();
        Self {
            begin: now,
            delta: now,
            complete: 0,
            total,
        }
    }
    pub fn tick(&mut self) {
        self.complete += 1;
        if self.complete % PROGRESS_CHECKPOINT == 0 {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::info!(
                "{:<24}{:<16}{:<16}",
                format!("runouts {:>10}/{}", self.complete, self.total),
                format!("{:>5.1}%", self.complete as f64 / self.total.max(1) as f64 * 100.0),
                format!("{:>8.0}/sec", PROGRESS_CHECKPOINT as f64 / delta_t.as_secs_f64().max(f64::EPSILON)),
            );
            log::debug!("elapsed {:.0?}", total_t);
        }
    }
    /// every expected runout has been ticked
    pub fn is_finished(&self) -> bool {
        self.complete >= self.total
    }
    pub fn complete(&self) -> Count {
        self.complete
    }
    pub fn elapsed(&self) -> std::time::Duration {
        self.begin.elapsed()
    }
}
