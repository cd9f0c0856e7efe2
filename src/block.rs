use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Schema version stamped on every document.
pub const DOCUMENT_VERSION: u32 = 1;

/// Inline content of a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inline {
    #[serde(rename = "text")]
    Text { text: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text { text } => text,
        }
    }
}

/// A paragraph holding a single text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "paragraph", from = "RawParagraph")]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::text(text)],
        }
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(Inline::as_str).collect()
    }
}

/// A single list item, wrapping exactly one paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "listItem", from = "RawListItem")]
pub struct ListItem {
    pub content: Vec<Paragraph>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Paragraph::text(text)],
        }
    }

    pub fn plain_text(&self) -> String {
        self.content.iter().map(Paragraph::plain_text).collect()
    }
}

/// Top-level blocks of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "paragraph")]
    Paragraph { content: Vec<Inline> },
    #[serde(rename = "bulletList")]
    BulletList { content: Vec<ListItem> },
    #[serde(rename = "orderedList")]
    OrderedList { content: Vec<ListItem> },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Block::BulletList { .. } | Block::OrderedList { .. })
    }

    /// Items of a list block. Paragraphs have none.
    pub fn items(&self) -> &[ListItem] {
        match self {
            Block::BulletList { content } | Block::OrderedList { content } => content,
            Block::Paragraph { .. } => &[],
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph {
            content: paragraph.content,
        }
    }
}

/// Root of a converted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc", try_from = "RawDocument")]
pub struct Document {
    pub version: u32,
    pub content: Vec<Block>,
}

impl Document {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// A struct-level serde tag is only written, never checked on input. The raw
// forms below require the `type` field to name the expected node.

#[derive(Deserialize)]
enum ParagraphTag {
    #[serde(rename = "paragraph")]
    Paragraph,
}

#[derive(Deserialize)]
enum ListItemTag {
    #[serde(rename = "listItem")]
    ListItem,
}

#[derive(Deserialize)]
enum DocTag {
    #[serde(rename = "doc")]
    Doc,
}

#[derive(Deserialize)]
struct RawParagraph {
    #[serde(rename = "type")]
    _tag: ParagraphTag,
    content: Vec<Inline>,
}

impl From<RawParagraph> for Paragraph {
    fn from(raw: RawParagraph) -> Self {
        Self {
            content: raw.content,
        }
    }
}

#[derive(Deserialize)]
struct RawListItem {
    #[serde(rename = "type")]
    _tag: ListItemTag,
    content: Vec<Paragraph>,
}

impl From<RawListItem> for ListItem {
    fn from(raw: RawListItem) -> Self {
        Self {
            content: raw.content,
        }
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    _tag: DocTag,
    version: u32,
    content: Vec<Block>,
}

impl TryFrom<RawDocument> for Document {
    type Error = SchemaError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        if raw.version != DOCUMENT_VERSION {
            return Err(SchemaError::UnsupportedVersion {
                found: raw.version,
                expected: DOCUMENT_VERSION,
            });
        }
        Ok(Self::new(raw.content))
    }
}
