//! Browser Bindings
//!
//! Thin wrappers over the host APIs the app touches, organized by concern.

mod catalog;
mod storage;
mod page;

// Re-export all public items
pub use catalog::*;
pub use storage::*;
pub use page::*;
