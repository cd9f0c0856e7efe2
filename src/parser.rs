use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Block, Document, ListItem};

/// Ordered list marker: ASCII digits, a period, then at least one whitespace character
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s+").unwrap());

const BULLET_MARKERS: [&str; 2] = ["- ", "* "];

/// Drop a leading metadata block fenced by `---` lines.
///
/// Both fences must be lines of their own. Without a closing fence the text
/// comes back untouched, so a document that merely starts with a `---` line
/// keeps it.
pub fn strip_frontmatter(markdown: &str) -> &str {
    let mut lines = markdown.split_inclusive('\n');
    let Some(opening) = lines.next().filter(|line| is_fence(line)) else {
        return markdown;
    };

    let mut offset = opening.len();
    for line in lines {
        offset += line.len();
        if is_fence(line) {
            return markdown[offset..].trim_start_matches(['\r', '\n']);
        }
    }
    markdown
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Convert markdown text into a document tree.
///
/// Never fails: blank input yields an empty document and any line that is
/// not a list item becomes a paragraph.
pub fn convert(markdown: &str) -> Document {
    let markdown = normalize_line_endings(markdown);
    let mut state = ParseState::default();
    let mut line_count: usize = 0;

    for line in markdown.split('\n') {
        line_count += 1;
        process_line(classify(line), &mut state);
    }

    let blocks = state.finish();
    log::debug!("converted {line_count} lines into {} blocks", blocks.len());
    Document::new(blocks)
}

fn normalize_line_endings(markdown: &str) -> Cow<'_, str> {
    if markdown.contains('\r') {
        Cow::Owned(markdown.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(markdown)
    }
}

/// A source line after trimming, with any list marker already removed
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Bullet(&'a str),
    Ordered(&'a str),
    Text(&'a str),
    Blank,
}

fn classify(line: &str) -> Line<'_> {
    // A byte order mark counts as leading whitespace
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Line::Blank;
    }

    if let Some(text) = BULLET_MARKERS
        .iter()
        .find_map(|&marker| trimmed.strip_prefix(marker))
    {
        return Line::Bullet(text);
    }

    if let Some(marker) = ORDERED_MARKER.find(trimmed) {
        return Line::Ordered(&trimmed[marker.end()..]);
    }

    Line::Text(trimmed)
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    // The list currently receiving items, if any
    open_list: Option<ListBuilder>,
}

struct ListBuilder {
    ordered: bool,
    items: Vec<ListItem>,
}

impl ListBuilder {
    fn new(ordered: bool) -> Self {
        Self {
            ordered,
            items: Vec::new(),
        }
    }

    fn into_block(self) -> Block {
        if self.ordered {
            Block::OrderedList {
                content: self.items,
            }
        } else {
            Block::BulletList {
                content: self.items,
            }
        }
    }
}

impl ParseState {
    fn push_item(&mut self, ordered: bool, text: &str) {
        // List kind never changes mid-list; a different marker starts a new one
        if self
            .open_list
            .as_ref()
            .is_some_and(|list| list.ordered != ordered)
        {
            self.close_list();
        }

        let list = self
            .open_list
            .get_or_insert_with(|| ListBuilder::new(ordered));
        list.items.push(ListItem::text(text));
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            log::trace!(
                "closing {} list with {} items",
                if list.ordered { "ordered" } else { "bullet" },
                list.items.len()
            );
            self.blocks.push(list.into_block());
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }
}

fn process_line(line: Line<'_>, state: &mut ParseState) {
    match line {
        Line::Bullet(text) => state.push_item(false, text),
        Line::Ordered(text) => state.push_item(true, text),
        Line::Text(text) => {
            state.close_list();
            state.blocks.push(Block::paragraph(text));
        }
        Line::Blank => state.close_list(),
    }
}
