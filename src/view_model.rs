//! View-Model
//!
//! Pure derivation of what the grid shows from catalog, favorites and filter.

use crate::catalog::CatalogState;
use crate::favorites::FavoriteSet;
use crate::models::Item;

/// Active navigation filter
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Category(String),
}

impl Filter {
    /// `"all"`, `"favorites"`, anything else names a category
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Filter::All,
            "favorites" => Filter::Favorites,
            other => Filter::Category(other.to_string()),
        }
    }

    /// Whether toggling a favorite can change list membership
    pub fn depends_on_favorites(&self) -> bool {
        matches!(self, Filter::Favorites)
    }

    fn admits(&self, item: &Item, favorites: &FavoriteSet) -> bool {
        match self {
            Filter::All => true,
            Filter::Favorites => favorites.contains(item.id),
            Filter::Category(category) => item.category == *category,
        }
    }
}

/// What the main area renders
#[derive(Clone, Debug, PartialEq)]
pub enum ViewContent {
    Pending,
    Failed,
    NoFavorites,
    Grid(Vec<Item>),
}

/// Items passing `filter`, always in catalog order
pub fn visible_items(items: &[Item], favorites: &FavoriteSet, filter: &Filter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.admits(item, favorites))
        .cloned()
        .collect()
}

pub fn view_content(catalog: &CatalogState, favorites: &FavoriteSet, filter: &Filter) -> ViewContent {
    match catalog {
        CatalogState::Pending => ViewContent::Pending,
        CatalogState::Failed(_) => ViewContent::Failed,
        CatalogState::Loaded(items) => {
            let visible = visible_items(items, favorites, filter);
            if visible.is_empty() && *filter == Filter::Favorites {
                ViewContent::NoFavorites
            } else {
                ViewContent::Grid(visible)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::make_item;
    use crate::error::AppError;

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(4, "coffee"),
            make_item(2, "tea"),
            make_item(9, "coffee"),
            make_item(1, "refreshers"),
        ]
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("favorites"), Filter::Favorites);
        assert_eq!(Filter::parse("tea"), Filter::Category("tea".into()));
    }

    #[test]
    fn test_all_keeps_load_order() {
        let items = sample();
        let mut favorites = FavoriteSet::default();
        favorites.toggle(9);
        assert_eq!(ids(&visible_items(&items, &favorites, &Filter::Favorites)), vec![9]);
        assert_eq!(ids(&visible_items(&items, &favorites, &Filter::All)), vec![4, 2, 9, 1]);
    }

    #[test]
    fn test_favorites_use_catalog_order() {
        let items = sample();
        let mut favorites = FavoriteSet::default();
        for id in [1, 4, 9] {
            favorites.toggle(id);
        }
        assert_eq!(ids(&visible_items(&items, &favorites, &Filter::Favorites)), vec![4, 9, 1]);
    }

    #[test]
    fn test_stale_favorites_ignored() {
        let items = sample();
        let favorites = FavoriteSet::from_json(Some("[100, 200]"));
        assert!(visible_items(&items, &favorites, &Filter::Favorites).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let items = sample();
        let favorites = FavoriteSet::default();
        let coffee = Filter::Category("coffee".into());
        assert_eq!(ids(&visible_items(&items, &favorites, &coffee)), vec![4, 9]);
        let unknown = Filter::Category("juice".into());
        assert!(visible_items(&items, &favorites, &unknown).is_empty());
    }

    #[test]
    fn test_depends_on_favorites() {
        assert!(Filter::Favorites.depends_on_favorites());
        assert!(!Filter::All.depends_on_favorites());
        assert!(!Filter::Category("tea".into()).depends_on_favorites());
    }

    #[test]
    fn test_toggle_then_favorites_scenario() {
        let mut catalog = CatalogState::default();
        catalog.settle(Ok(vec![make_item(1, "coffee"), make_item(2, "tea")]));
        let mut favorites = FavoriteSet::default();

        favorites.toggle(2);
        assert_eq!(favorites.ids(), &[2]);
        match view_content(&catalog, &favorites, &Filter::Favorites) {
            ViewContent::Grid(items) => assert_eq!(ids(&items), vec![2]),
            other => panic!("unexpected {:?}", other),
        }

        favorites.toggle(2);
        assert!(favorites.is_empty());
        assert_eq!(view_content(&catalog, &favorites, &Filter::Favorites), ViewContent::NoFavorites);
    }

    #[test]
    fn test_failed_load_shows_error_only() {
        let mut catalog = CatalogState::default();
        catalog.settle(Err(AppError::Network("offline".into())));
        let favorites = FavoriteSet::from_json(Some("[1]"));
        assert_eq!(view_content(&catalog, &favorites, &Filter::All), ViewContent::Failed);
        assert_eq!(view_content(&catalog, &favorites, &Filter::Favorites), ViewContent::Failed);
    }

    #[test]
    fn test_pending_before_load() {
        let catalog = CatalogState::default();
        let favorites = FavoriteSet::default();
        assert_eq!(view_content(&catalog, &favorites, &Filter::All), ViewContent::Pending);
    }
}
