use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The visual treatment applied to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationType {
    /// Large, prominent.
    Block,
    /// Tall and narrow.
    Column,
    /// Compact.
    Card,
}

impl PresentationType {
    /// Every presentation type, in declaration order.
    pub const ALL: [PresentationType; 3] = [Self::Block, Self::Column, Self::Card];

    /// The stored identifier (`"block"`, `"column"`, `"card"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Column => "column",
            Self::Card => "card",
        }
    }

    /// Human-facing label (`"Block"`, `"Column"`, `"Card"`).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Column => "Column",
            Self::Card => "Card",
        }
    }
}

impl fmt::Display for PresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no presentation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPresentationType(pub String);

impl fmt::Display for UnknownPresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown presentation type: {}", self.0)
    }
}

impl std::error::Error for UnknownPresentationType {}

impl FromStr for PresentationType {
    type Err = UnknownPresentationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "column" => Ok(Self::Column),
            "card" => Ok(Self::Card),
            other => Err(UnknownPresentationType(other.to_string())),
        }
    }
}

/// An uploaded file attached to a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub url: String,
}

impl Document {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A titled content unit with a free-text body and ordered attachments.
///
/// Blocks have no id: a block is identified by its index in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub docs: Vec<Document>,
    /// Overrides layout-driven presentation when set.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_presentation"
    )]
    pub explicit_type: Option<PresentationType>,
}

impl Block {
    /// Creates a block with no attachments whose presentation follows the layout.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            docs: Vec::new(),
            explicit_type: None,
        }
    }

    /// Creates a block pinned to a presentation type.
    pub fn with_type(
        title: impl Into<String>,
        body: impl Into<String>,
        presentation: PresentationType,
    ) -> Self {
        Self {
            explicit_type: Some(presentation),
            ..Self::new(title, body)
        }
    }

    /// Returns the number of attached documents.
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }
}

/// Stored blocks written by older editors may carry type strings this build
/// does not know; those fall back to layout-driven presentation.
fn lenient_presentation<'de, D>(deserializer: D) -> Result<Option<PresentationType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(|s| s.parse().ok()))
}
