pub mod drafts;
pub mod realtime;

pub use drafts::DraftCache;
pub use realtime::{
    HttpRealtimeProvider, RealtimeDataProvider, RealtimeHandle, RealtimeService,
    RealtimeSnapshot, RealtimeUpdate,
};
