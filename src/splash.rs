//! Loading screen progress
//!
//! Owned by the splash view for its lifetime: a percentage that advances
//! one step per interval tick and reports completion exactly once.

use crate::config::SplashConfig;

/// Result of one interval tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashTick {
    /// Progress moved to this percentage
    Advanced(u8),
    /// Reached 100%; stop ticking and finish after the configured delay
    Completed,
    /// Already completed; the tick was stale
    Idle,
}

#[derive(Debug, Clone)]
pub struct SplashProgress {
    percent: u8,
    step: u8,
    completed: bool,
}

impl SplashProgress {
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            percent: 0,
            step: config.step.max(1),
            completed: false,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn tick(&mut self) -> SplashTick {
        if self.completed {
            return SplashTick::Idle;
        }
        if self.percent >= 100 {
            self.completed = true;
            return SplashTick::Completed;
        }
        self.percent = self.percent.saturating_add(self.step).min(100);
        SplashTick::Advanced(self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_takes_fifty_one_ticks() {
        let mut progress = SplashProgress::new(&SplashConfig::default());
        let mut ticks = 0;
        loop {
            ticks += 1;
            if progress.tick() == SplashTick::Completed {
                break;
            }
        }
        // 50 steps of 2%, then the tick that observes 100%
        assert_eq!(ticks, 51);
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_completed());
    }

    #[test]
    fn test_completes_once() {
        let mut progress = SplashProgress::new(&SplashConfig {
            step: 60,
            ..Default::default()
        });
        assert_eq!(progress.tick(), SplashTick::Advanced(60));
        assert_eq!(progress.tick(), SplashTick::Advanced(100));
        assert_eq!(progress.tick(), SplashTick::Completed);
        assert_eq!(progress.tick(), SplashTick::Idle);
        assert_eq!(progress.tick(), SplashTick::Idle);
    }

    #[test]
    fn test_zero_step_still_advances() {
        let mut progress = SplashProgress::new(&SplashConfig {
            step: 0,
            ..Default::default()
        });
        assert_eq!(progress.tick(), SplashTick::Advanced(1));
    }
}
