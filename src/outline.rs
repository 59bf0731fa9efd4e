use serde::Serialize;

use crate::entity::{Block, InlineContent};

/// A heading as it appears in a table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// 1 for `#`, 2 for `##`.
    pub level: u8,
    /// Anchor id, the target of `[label](#id)` links.
    pub id: String,
    /// Heading text with link labels flattened in.
    pub text: String,
}

/// Lists headings in document order. Repeated ids are reported as they are.
pub fn outline(blocks: &[Block]) -> Vec<OutlineEntry> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading1 { id, content } => Some(entry(1, id, content)),
            Block::Heading2 { id, content } => Some(entry(2, id, content)),
            _ => None,
        })
        .collect()
}

fn entry(level: u8, id: &str, content: &InlineContent) -> OutlineEntry {
    OutlineEntry {
        level,
        id: id.to_string(),
        text: content.iter().map(|node| node.plain_text()).collect(),
    }
}
