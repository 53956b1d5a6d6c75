//! Wall-clock scheduling for passive ticks and autosaves.
//!
//! The host feeds elapsed milliseconds; [`Cadence`] answers how many ticks and
//! whether a save are due. No timers or threads live in the engine.

use super::config::GameConfig;

/// What fell due during one `Cadence::advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CadenceStep {
    /// Passive ticks to apply, in order.
    pub ticks: u64,
    /// At least one autosave interval elapsed. Overdue saves collapse into one.
    pub save_due: bool,
}

/// Accumulates elapsed time against the tick and autosave intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    tick_interval_ms: u64,
    autosave_interval_ms: u64,
    tick_elapsed_ms: u64,
    save_elapsed_ms: u64,
}

impl Cadence {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tick_interval_ms: config.tick_interval_ms.max(1),
            autosave_interval_ms: config.autosave_interval_ms.max(1),
            tick_elapsed_ms: 0,
            save_elapsed_ms: 0,
        }
    }

    /// Advance the clock. Ticks only accrue while `passive_active`; the partial
    /// tick is discarded whenever passive yield is off so a restart waits a full
    /// interval.
    pub fn advance(&mut self, elapsed_ms: u64, passive_active: bool) -> CadenceStep {
        let mut step = CadenceStep::default();

        if passive_active {
            self.tick_elapsed_ms = self.tick_elapsed_ms.saturating_add(elapsed_ms);
            step.ticks = self.tick_elapsed_ms / self.tick_interval_ms;
            self.tick_elapsed_ms %= self.tick_interval_ms;
        } else {
            self.tick_elapsed_ms = 0;
        }

        self.save_elapsed_ms = self.save_elapsed_ms.saturating_add(elapsed_ms);
        if self.save_elapsed_ms >= self.autosave_interval_ms {
            step.save_due = true;
            self.save_elapsed_ms %= self.autosave_interval_ms;
        }

        step
    }

    /// Restart the autosave interval, e.g. after a manual save.
    pub fn reset_save_timer(&mut self) {
        self.save_elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cadence() -> Cadence {
        Cadence::new(&GameConfig::default())
    }

    #[test]
    fn test_ticks_accumulate_across_calls() {
        let mut c = cadence();
        assert_eq!(c.advance(600, true).ticks, 0);
        assert_eq!(c.advance(600, true).ticks, 1);
        assert_eq!(c.advance(2_800, true).ticks, 3);
    }

    #[test]
    fn test_no_ticks_while_passive_inactive() {
        let mut c = cadence();
        assert_eq!(c.advance(5_000, false).ticks, 0);
        // Partial progress is dropped when passive yield turns off
        c.advance(900, true);
        c.advance(10, false);
        assert_eq!(c.advance(200, true).ticks, 0);
    }

    #[test]
    fn test_autosave_every_interval() {
        let mut c = cadence();
        assert!(!c.advance(9_999, false).save_due);
        assert!(c.advance(1, false).save_due);
        assert!(!c.advance(5_000, false).save_due);
    }

    #[test]
    fn test_overdue_saves_collapse() {
        let mut c = cadence();
        let step = c.advance(35_000, true);
        assert_eq!(step.ticks, 35);
        assert!(step.save_due);
        assert!(!c.advance(4_000, true).save_due);
        assert!(c.advance(1_000, true).save_due);
    }

    #[test]
    fn test_huge_elapsed_saturates() {
        let mut c = cadence();
        c.advance(500, true);
        let step = c.advance(u64::MAX, true);
        assert_eq!(step.ticks, u64::MAX / 1_000);
        assert!(step.save_due);
    }

    #[test]
    fn test_reset_save_timer() {
        let mut c = cadence();
        c.advance(9_000, false);
        c.reset_save_timer();
        assert!(!c.advance(9_000, false).save_due);
    }
}
