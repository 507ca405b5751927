use serde::{Deserialize, Serialize};
use std::fmt;

/// Active visual appearance of the SDK surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeStyle::Light => write!(f, "light"),
            ThemeStyle::Dark => write!(f, "dark"),
        }
    }
}

/// Optional host-application override of the theme style.
///
/// When not `None`, the enforced style wins over any requested style until
/// the enforcement is cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeStyleEnforcement {
    #[default]
    None,
    Theme(ThemeStyle),
}

impl ThemeStyleEnforcement {
    /// Resolve the effective style given the last unenforced request.
    pub fn resolve(&self, unenforced: ThemeStyle) -> ThemeStyle {
        match self {
            ThemeStyleEnforcement::None => unenforced,
            ThemeStyleEnforcement::Theme(style) => *style,
        }
    }
}
