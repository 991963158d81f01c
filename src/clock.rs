//! Wall-clock access

use chrono::{Datelike, Local};

/// Source of the current date
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }

    #[test]
    fn test_fixed_clock() {
        let clock: Box<dyn Clock> = Box::new(FixedClock(2031));
        assert_eq!(clock.current_year(), 2031);
    }
}
