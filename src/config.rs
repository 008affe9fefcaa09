//! App Configuration
//!
//! Fixed paths, storage key and presentation constants, provided via context.

/// Placeholder image colours (background, foreground) as bare hex
pub const PLACEHOLDER_BG: &str = "0A0E13";
pub const PLACEHOLDER_FG: &str = "00A862";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Relative path of the catalog document
    pub data_path: String,
    /// localStorage key holding the favorite ids
    pub storage_key: String,
    /// Placeholder size for grid cards (width, height)
    pub card_placeholder: (u32, u32),
    /// Placeholder size for the detail overlay (width, height)
    pub modal_placeholder: (u32, u32),
    /// Delay before the overlay entrance transition, in ms
    pub entrance_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "./data/drinks.json".to_string(),
            storage_key: "starbucks-favorites".to_string(),
            card_placeholder: (400, 300),
            modal_placeholder: (600, 400),
            entrance_delay_ms: 10,
        }
    }
}
