use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How a page groups its blocks into slots and picks each block's presentation.
///
/// Identifiers outside the known set are kept verbatim in [`LayoutId::Other`]
/// so they survive a load/save cycle; they behave like [`LayoutId::Standard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutId {
    #[default]
    Standard,
    Grid,
    List,
    Columns2,
    Columns3,
    LeftSidebar,
    RightSidebar,
    Hero,
    Masonry,
    Other(String),
}

impl LayoutId {
    /// Every known layout, in the order an administrator picks from.
    pub const KNOWN: [LayoutId; 9] = [
        Self::Standard,
        Self::Grid,
        Self::List,
        Self::Columns2,
        Self::Columns3,
        Self::LeftSidebar,
        Self::RightSidebar,
        Self::Hero,
        Self::Masonry,
    ];

    /// The stored identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Columns2 => "columns-2",
            Self::Columns3 => "columns-3",
            Self::LeftSidebar => "left-sidebar",
            Self::RightSidebar => "right-sidebar",
            Self::Hero => "hero",
            Self::Masonry => "masonry",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `false` for identifiers outside the known set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        match s {
            "standard" => Self::Standard,
            "grid" => Self::Grid,
            "list" => Self::List,
            "columns-2" => Self::Columns2,
            "columns-3" => Self::Columns3,
            "left-sidebar" => Self::LeftSidebar,
            "right-sidebar" => Self::RightSidebar,
            "hero" => Self::Hero,
            "masonry" => Self::Masonry,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LayoutId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<LayoutId> for String {
    fn from(layout: LayoutId) -> Self {
        match layout {
            LayoutId::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for LayoutId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual theme identifier. The engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub const DEFAULT: &'static str = "default";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout and theme of a page, stored as a `{layout, theme}` JSON object
/// next to the page row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub layout: LayoutId,
    #[serde(default)]
    pub theme: ThemeId,
}

impl PageConfig {
    pub fn new(layout: LayoutId, theme: ThemeId) -> Self {
        Self { layout, theme }
    }

    /// Serializes the config to its stored JSON form.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a stored config. Missing or corrupt input yields the default
    /// (`standard` layout, `default` theme).
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Unparsable page config, using defaults");
                Self::default()
            }
        }
    }
}
