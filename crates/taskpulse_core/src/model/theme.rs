//! Visual theme preference.
//!
//! The theme itself is presentation concern; the core only owns the
//! persisted preference and its tolerant decoding.

/// Persisted color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Decodes a persisted theme value.
    ///
    /// Anything other than `"light"` falls back to the dark default, so a
    /// corrupted blob can never wedge the widget.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The other theme, for presentation-side toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
