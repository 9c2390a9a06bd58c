//! Sidebar item lists.
//!
//! The page layout shows two sidebars, each with a fixed header and an
//! independently scrollable list of items. Scrolling is the host's job;
//! this module owns only the ordered labels each list renders.

use serde::{Deserialize, Serialize};

/// One sidebar's ordered item labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next item ("Item 1", "Item 2", …) and return its label.
    pub fn add(&mut self) -> &str {
        let label = format!("Item {}", self.items.len() + 1);
        self.items.push(label);
        self.items.last().expect("just pushed")
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Both sidebars of the page. The lists are fully independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub left: ItemList,
    pub right: ItemList,
}

impl SidebarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
