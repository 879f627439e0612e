use std::time::Duration;

/// Running tally of per-image processing durations.
#[derive(Debug, Default)]
pub struct TimeCalc {
    duration: Vec<Duration>,
}

impl TimeCalc {
    pub fn total(&self) -> Duration {
        self.duration.iter().sum::<Duration>()
    }

    pub fn n(&self) -> usize {
        self.duration.len()
    }

    pub fn avg(&self) -> Duration {
        match self.n() {
            0 => Duration::ZERO,
            n => self.total() / n as u32,
        }
    }

    pub fn max(&self) -> Duration {
        self.duration.iter().max().copied().unwrap_or_default()
    }

    pub fn push(&mut self, x: Duration) {
        self.duration.push(x);
    }
}
