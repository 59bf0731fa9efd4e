//! Renderer for the restricted markdown dialect used by backstage pages.
//!
//! Headings, paragraphs, unordered lists, pipe tables and inline links are
//! parsed into a [`Block`] tree. Heading ids are slugs, and every link is
//! classified as anchor, internal or external from its url prefix.

pub mod entity;
pub mod outline;
pub mod parser;
pub mod slug;
pub mod translator;

pub use entity::{Block, Inline, InlineContent, LinkKind};
pub use outline::{outline, OutlineEntry};
pub use parser::{is_separator_row, parse_document, parse_inline, parse_table_row, render_document};
pub use slug::slugify;
pub use translator::translate;
