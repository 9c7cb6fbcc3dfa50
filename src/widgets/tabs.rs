//! Product tab and transition panel state.

/// One feature row of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Emoji or image path.
    pub icon: String,
    /// Feature heading.
    pub title: String,
    /// Feature text.
    pub description: String,
}

impl Feature {
    /// Whether the icon refers to an image rather than inline text.
    pub fn icon_is_image(&self) -> bool {
        self.icon.starts_with('/')
    }
}

/// A product shown in a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Stable identifier.
    pub id: String,
    /// Tab label.
    pub name: String,
    /// Features listed under the tab.
    pub features: Vec<Feature>,
}

/// Tabs selected by product id.
#[derive(Debug, Clone)]
pub struct ProductTabs {
    products: Vec<Product>,
    active: String,
}

impl ProductTabs {
    /// Create tabs with the first product active.
    pub fn new(products: Vec<Product>) -> Self {
        let active = products.first().map(|p| p.id.clone()).unwrap_or_default();
        Self { products, active }
    }

    /// Id of the active tab.
    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// Select the tab with the given id.
    pub fn select(&mut self, id: &str) {
        self.active = id.to_string();
    }

    /// The active product; `None` when the id matches no product.
    pub fn active_product(&self) -> Option<&Product> {
        self.products.iter().find(|p| p.id == self.active)
    }
}

/// Slide direction of a panel change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// No change yet.
    #[default]
    None,
    /// Moving to a later panel.
    Forward,
    /// Moving to an earlier (or the same) panel.
    Backward,
}

impl Direction {
    /// Signed offset used to pick the enter/exit side.
    pub fn offset(self) -> i8 {
        match self {
            Direction::None => 0,
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index-selected panels that slide in the direction of travel.
#[derive(Debug, Clone, Default)]
pub struct TransitionPanel {
    len: usize,
    active: usize,
    direction: Direction,
}

impl TransitionPanel {
    /// Create a panel set of `len` panels with the first one active.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            direction: Direction::None,
        }
    }

    /// Index of the visible panel.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Direction of the last change.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Show panel `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.direction = if index > self.active {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_uppercase(),
            features: vec![Feature {
                icon: "/icons/jigsaw.svg".to_string(),
                title: "Puzzle".to_string(),
                description: "Fits".to_string(),
            }],
        }
    }

    #[test]
    fn test_tabs_default_to_first() {
        let tabs = ProductTabs::new(vec![product("a"), product("b")]);
        assert_eq!(tabs.active_id(), "a");
        assert_eq!(tabs.active_product().unwrap().name, "A");
    }

    #[test]
    fn test_tabs_empty() {
        let tabs = ProductTabs::new(vec![]);
        assert_eq!(tabs.active_id(), "");
        assert!(tabs.active_product().is_none());
    }

    #[test]
    fn test_tabs_select() {
        let mut tabs = ProductTabs::new(vec![product("a"), product("b")]);

        tabs.select("b");
        assert_eq!(tabs.active_product().unwrap().id, "b");

        tabs.select("missing");
        assert!(tabs.active_product().is_none());
    }

    #[test]
    fn test_feature_icon_kind() {
        let feature = &product("a").features[0];
        assert!(feature.icon_is_image());

        let emoji = Feature {
            icon: "⚡".to_string(),
            ..feature.clone()
        };
        assert!(!emoji.icon_is_image());
    }

    #[test]
    fn test_panel_direction() {
        let mut panel = TransitionPanel::new(3);
        assert_eq!(panel.direction(), Direction::None);

        panel.select(2);
        assert_eq!(panel.active(), 2);
        assert_eq!(panel.direction().offset(), 1);

        panel.select(0);
        assert_eq!(panel.active(), 0);
        assert_eq!(panel.direction(), Direction::Backward);

        // Reselecting the active panel counts as backward
        panel.select(0);
        assert_eq!(panel.direction().offset(), -1);
    }

    #[test]
    fn test_panel_out_of_range() {
        let mut panel = TransitionPanel::new(2);
        panel.select(7);
        assert_eq!(panel.active(), 0);
        assert_eq!(panel.direction(), Direction::None);
    }
}
