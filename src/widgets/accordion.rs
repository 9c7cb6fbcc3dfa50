//! FAQ accordion state.

/// Keys that toggle a focused accordion header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a DOM-style key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// One question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    /// Header text.
    pub question: String,
    /// Body text.
    pub answer: String,
}

/// Accordion where at most one item is open.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<FaqItem>,
    open: Option<usize>,
}

impl Accordion {
    /// Create an accordion with every item closed.
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self { items, open: None }
    }

    /// Items in display order.
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    /// Index of the open item.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether item `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open item `index`, or close it if it is already open.
    ///
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Handle a key press on the header of item `index`.
    ///
    /// Returns `true` when the key was consumed.
    pub fn key_down(&mut self, index: usize, key: Key) -> bool {
        match key {
            Key::Enter | Key::Space => {
                self.toggle(index);
                true
            }
            Key::Other => false,
        }
    }
}
