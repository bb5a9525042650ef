//! Burning Level Timer
//!
//! A level counter that drops by one every cycle until it reaches zero.
//! The countdown keeps cycling at level zero. Scheduling the one-second tick
//! is the caller's job; this module only holds the state machine.

use crate::config::TimerConfig;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counted one second down
    Counting,
    /// Cycle elapsed and the level dropped to the contained value
    LevelDropped(u8),
    /// Cycle elapsed at level zero
    CycleRestarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurningTimer {
    level: u8,
    remaining: u32,
    max_level: u8,
    cycle_seconds: u32,
}

impl Default for BurningTimer {
    fn default() -> Self {
        Self::from_config(&TimerConfig::default())
    }
}

impl BurningTimer {
    pub fn new(max_level: u8, cycle_seconds: u32) -> Self {
        Self {
            level: max_level,
            remaining: cycle_seconds,
            max_level,
            cycle_seconds,
        }
    }

    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(config.max_level, config.cycle_seconds)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance one second. Counting below zero wraps to a full cycle.
    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining.checked_sub(1) {
            Some(remaining) => {
                self.remaining = remaining;
                TickOutcome::Counting
            }
            None => {
                self.remaining = self.cycle_seconds;
                if self.level > 0 {
                    self.level -= 1;
                    TickOutcome::LevelDropped(self.level)
                } else {
                    TickOutcome::CycleRestarted
                }
            }
        }
    }

    /// Back to the initial level and a full cycle
    pub fn reset(&mut self) {
        self.level = self.max_level;
        self.remaining = self.cycle_seconds;
    }

    /// `MM:SS` of the remaining time
    pub fn display(&self) -> String {
        format_time(self.remaining)
    }
}

/// Render seconds as zero-padded `MM:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(timer: &mut BurningTimer, ticks: u32) {
        for _ in 0..ticks {
            timer.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = BurningTimer::default();
        assert_eq!(timer.level(), 10);
        assert_eq!(timer.remaining(), 900);
        assert_eq!(timer.display(), "15:00");
    }

    #[test]
    fn test_countdown_reaches_zero_before_wrapping() {
        let mut timer = BurningTimer::default();
        run(&mut timer, 900);
        assert_eq!(timer.level(), 10);
        assert_eq!(timer.remaining(), 0);

        assert_eq!(timer.tick(), TickOutcome::LevelDropped(9));
        assert_eq!(timer.remaining(), 900);
    }

    #[test]
    fn test_level_floor() {
        let mut timer = BurningTimer::default();
        run(&mut timer, 9000);
        assert_eq!(timer.level(), 1);

        run(&mut timer, 901 * 3);
        assert_eq!(timer.level(), 0);
        assert!(timer.remaining() <= 900);
    }

    #[test]
    fn test_cycles_at_level_zero() {
        let mut timer = BurningTimer::new(0, 2);
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::CycleRestarted);
        assert_eq!(timer.level(), 0);
        assert_eq!(timer.remaining(), 2);
    }

    #[test]
    fn test_reset() {
        let mut timer = BurningTimer::default();
        run(&mut timer, 2000);
        timer.reset();
        assert_eq!(timer, BurningTimer::default());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(900), "15:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(0), "00:00");
    }
}
