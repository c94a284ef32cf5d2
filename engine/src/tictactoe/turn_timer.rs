/// Countdown for the human's turn, advanced one whole second per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnTimer {
    enabled: bool,
    seconds: u32,
    remaining: Option<u32>,
}

impl TurnTimer {
    pub fn new(enabled: bool, seconds: u32) -> Self {
        Self {
            enabled,
            seconds,
            remaining: None,
        }
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Re-arms to the full duration; does nothing while disabled.
    pub fn start(&mut self) {
        self.remaining = self.enabled.then_some(self.seconds);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn configure(&mut self, enabled: bool, seconds: u32) {
        self.enabled = enabled;
        self.seconds = seconds;
        if !enabled {
            self.stop();
        }
    }

    /// Returns the seconds left after this tick, or `None` when not running.
    pub fn tick(&mut self) -> Option<u32> {
        let remaining = self.remaining.as_mut()?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }
}
