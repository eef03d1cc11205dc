/// Per-session player statistics: shots and survival time.
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct PlayerStats {
    start: Instant,
    shots_fired: u32,
    shots_hit: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStats {
    /// Start tracking from now.
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// Start tracking from a given instant.
    pub fn started_at(start: Instant) -> Self {
        Self {
            start,
            shots_fired: 0,
            shots_hit: 0,
        }
    }

    pub fn record_shot_fired(&mut self) {
        self.shots_fired += 1;
    }

    pub fn record_shot_hit(&mut self) {
        self.shots_hit += 1;
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whole seconds since the session started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Hit ratio in `[0, 1]`; 0 when nothing has been fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            f64::from(self.shots_hit) / f64::from(self.shots_fired)
        }
    }
}
