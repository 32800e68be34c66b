//! Percentage progress over a fixed amount of work.

/// Turns a count of finished steps into whole-percent progress updates.
///
/// Percentages are `floor(completed * 100 / total)` and an update is only
/// produced when the value differs from the last one handed out, so a sink
/// fed from [`advance`](Self::advance) sees a strictly increasing sequence.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: usize,
    completed: usize,
    last: Option<u8>,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            last: None,
        }
    }

    /// Marks the start of the work and returns the initial `0`.
    pub fn start(&mut self) -> u8 {
        self.last = Some(0);
        0
    }

    /// Records one finished step. Returns the new percentage if it changed.
    pub fn advance(&mut self) -> Option<u8> {
        self.completed = (self.completed + 1).min(self.total.max(1));
        let percent = self.percent();
        if self.last == Some(percent) {
            None
        } else {
            self.last = Some(percent);
            Some(percent)
        }
    }

    /// Current percentage; `100` when there is nothing to do.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        // u128 keeps completed * 100 exact for any usize total.
        let percent = (self.completed as u128 * 100) / self.total as u128;
        percent.min(100) as u8
    }

    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }
}
