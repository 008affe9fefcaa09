//! Detail Overlay State
//!
//! Single overlay instance: `Closed` or showing one item.

use crate::models::Item;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Item),
}

impl Overlay {
    /// Show `item`, replacing whatever is open
    pub fn select(&mut self, item: Item) {
        *self = Overlay::Open(item);
    }

    pub fn dismiss(&mut self) {
        *self = Overlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            Overlay::Open(item) => Some(item),
            Overlay::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::make_item;

    #[test]
    fn test_initially_closed() {
        let overlay = Overlay::default();
        assert!(!overlay.is_open());
        assert!(overlay.item().is_none());
    }

    #[test]
    fn test_select_and_dismiss() {
        let mut overlay = Overlay::default();
        overlay.select(make_item(1, "coffee"));
        assert_eq!(overlay.item().map(|i| i.id), Some(1));
        overlay.dismiss();
        assert_eq!(overlay, Overlay::Closed);
        // Dismissing twice is harmless
        overlay.dismiss();
        assert_eq!(overlay, Overlay::Closed);
    }

    #[test]
    fn test_select_while_open_replaces_directly() {
        let mut overlay = Overlay::default();
        overlay.select(make_item(1, "coffee"));
        overlay.select(make_item(2, "tea"));
        assert_eq!(overlay, Overlay::Open(make_item(2, "tea")));
    }
}
