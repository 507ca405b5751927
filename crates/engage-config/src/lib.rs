//! Engage configuration layer.
//!
//! Holds the server-delivered config snapshot (feature flags and persisted
//! theme settings) and the theme style service built on top of it.

pub mod schema;
pub mod theme;

pub use schema::{MobileSdkConfig, SpotConfig, ThemeConfig, DEFAULT_COMMENT_MIN_LENGTH};
pub use theme::ThemeService;
