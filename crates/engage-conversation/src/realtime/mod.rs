//! Realtime conversation metadata: wire types, the data-provider seam, and
//! the polling service.

pub mod provider;
pub mod service;
pub mod types;

pub use provider::{HttpRealtimeProvider, RealtimeDataProvider};
pub use service::{RealtimeHandle, RealtimeService, RealtimeUpdate};
pub use types::{MessageCounts, RealtimeData, RealtimeSnapshot, ViewingUsersCount};
