//! Theme style service.
//!
//! Single source of truth for the light/dark presentation mode, with an
//! optional enforcement override the host application can apply to lock one
//! style irrespective of the user or system preference. Changes are published
//! through a [`tokio::sync::watch`] channel, so new subscribers observe the
//! current value immediately and are woken once per distinct change.

use engage_common::{ThemeStyle, ThemeStyleEnforcement};
use tokio::sync::watch;
use tracing::debug;

use crate::schema::ThemeConfig;

pub struct ThemeService {
    tx: watch::Sender<ThemeStyle>,
    /// Last style requested through `set_style`, remembered even while an
    /// enforcement is active.
    unenforced: ThemeStyle,
    enforcement: ThemeStyleEnforcement,
}

impl ThemeService {
    pub fn new(initial: ThemeStyle) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            tx,
            unenforced: initial,
            enforcement: ThemeStyleEnforcement::None,
        }
    }

    /// Build from the persisted theme section, applying any enforcement.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut service = Self::new(config.initial_style);
        service.set_enforcement(config.enforcement());
        service
    }

    /// The style currently visible to subscribers.
    pub fn current(&self) -> ThemeStyle {
        *self.tx.borrow()
    }

    pub fn enforcement(&self) -> ThemeStyleEnforcement {
        self.enforcement
    }

    /// Observe style changes. The receiver holds the current value; await
    /// `changed()` for subsequent distinct updates.
    pub fn subscribe(&self) -> watch::Receiver<ThemeStyle> {
        self.tx.subscribe()
    }

    /// Request a style. Remembered always; visible only while no enforcement
    /// is active.
    pub fn set_style(&mut self, style: ThemeStyle) {
        self.unenforced = style;
        if self.enforcement == ThemeStyleEnforcement::None {
            self.publish(style);
        }
    }

    /// Apply or clear an enforcement. Clearing reverts to the last style
    /// requested through `set_style`.
    pub fn set_enforcement(&mut self, enforcement: ThemeStyleEnforcement) {
        self.enforcement = enforcement;
        self.publish(enforcement.resolve(self.unenforced));
    }

    fn publish(&self, style: ThemeStyle) {
        let changed = self.tx.send_if_modified(|current| {
            if *current != style {
                *current = style;
                true
            } else {
                false
            }
        });
        if changed {
            debug!(style = %style, "theme style changed");
        }
    }
}
