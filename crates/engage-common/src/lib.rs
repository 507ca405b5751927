pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, EngageError, RealtimeError};
pub use events::{EventBus, SdkEvent};
pub use id::{new_draft_id, ConversationId};
pub use types::{ThemeStyle, ThemeStyleEnforcement};

pub type Result<T> = std::result::Result<T, EngageError>;
