//! UI Components
//!
//! Reusable Leptos components.

mod drink_card;
mod drink_grid;
mod drink_image;
mod drink_modal;
mod favorite_button;
mod nav_bar;
mod status_panel;

pub use drink_card::DrinkCard;
pub use drink_grid::DrinkGrid;
pub use drink_image::DrinkImage;
pub use drink_modal::DrinkModal;
pub use favorite_button::FavoriteButton;
pub use nav_bar::NavBar;
pub use status_panel::StatusPanel;
