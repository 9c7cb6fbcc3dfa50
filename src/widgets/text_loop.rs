//! Rotating text state.

use std::time::Duration;

/// Default time each item stays visible.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Cycles through a list of words.
#[derive(Debug, Clone)]
pub struct TextLoop {
    items: Vec<String>,
    index: usize,
    interval: Duration,
}

impl TextLoop {
    /// Create a loop over `items`, dropping whitespace-only entries.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.trim().is_empty())
            .collect();

        Self {
            items,
            index: 0,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Set the rotation interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Rotation interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the loop rotates at all.
    pub fn is_animated(&self) -> bool {
        self.items.len() > 1
    }

    /// The visible item; `None` when there is nothing to show.
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.index).map(String::as_str)
    }

    /// Advance to the next item, wrapping around.
    pub fn tick(&mut self) {
        if self.is_animated() {
            self.index = (self.index + 1) % self.items.len();
        }
    }
}
