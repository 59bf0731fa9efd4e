use crate::entity::{Block, Inline, InlineContent};
use crate::slug::slugify;

use nom::{
    bytes::complete::{is_not, tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, opt, recognize, verify},
    sequence::{delimited, pair, tuple},
    IResult,
};
use tracing::{debug, trace};

/// Renders a document, treating absent and empty input alike.
pub fn render_document(markdown: Option<&str>) -> Option<Vec<Block>> {
    match markdown {
        None | Some("") => None,
        Some(text) => Some(parse_document(text)),
    }
}

/// Parses the whole document in one pass over its lines.
///
/// Never fails: pipe lines without a valid separator row become paragraph
/// text, unmatched link brackets stay literal, `###` and deeper headings
/// are ordinary paragraph lines.
pub fn parse_document(markdown: &str) -> Vec<Block> {
    let mut builder = DocumentBuilder::default();
    let mut count: usize = 0;
    for line in markdown.split('\n') {
        builder.feed(line);
        count += 1;
    }
    let blocks = builder.finish();
    debug!(lines = count, blocks = blocks.len(), "document parsed");
    blocks
}

/// The block currently being accumulated. At most one is open at a time.
#[derive(Debug, Default)]
enum Pending {
    #[default]
    Idle,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Table(Vec<String>),
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    blocks: Vec<Block>,
    pending: Pending,
}

impl DocumentBuilder {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if line.is_empty() {
            self.close();
            return;
        }

        // pipe lines win over headings and list items
        if line.contains('|') {
            if let Pending::Table(lines) = &mut self.pending {
                lines.push(line.to_string());
                return;
            }
            self.close();
            self.pending = Pending::Table(vec![line.to_string()]);
            return;
        }

        self.settle_table();

        if let Some(text) = line.strip_prefix("## ") {
            self.close();
            let text = text.trim();
            self.emit(Block::Heading2 {
                id: slugify(text),
                content: parse_inline(text),
            });
        } else if let Some(text) = line.strip_prefix("# ") {
            self.close();
            let text = text.trim();
            self.emit(Block::Heading1 {
                id: slugify(text),
                content: parse_inline(text),
            });
        } else if let Some(item) = line.strip_prefix("- ") {
            if let Pending::List(items) = &mut self.pending {
                items.push(item.to_string());
                return;
            }
            self.close();
            self.pending = Pending::List(vec![item.to_string()]);
        } else {
            if let Pending::Paragraph(lines) = &mut self.pending {
                lines.push(line.to_string());
                return;
            }
            self.close();
            self.pending = Pending::Paragraph(vec![line.to_string()]);
        }
    }

    /// Closes a pending table before a non-pipe line. An invalid table
    /// stays open as paragraph text so following lines can join it.
    fn settle_table(&mut self) {
        match std::mem::take(&mut self.pending) {
            Pending::Table(lines) => {
                if let Some(lines) = self.finish_table(lines) {
                    self.pending = Pending::Paragraph(lines);
                }
            }
            other => self.pending = other,
        }
    }

    /// Flushes whatever is open: table first, then paragraph, then list.
    fn close(&mut self) {
        match std::mem::take(&mut self.pending) {
            Pending::Idle => {}
            Pending::Table(lines) => {
                if let Some(lines) = self.finish_table(lines) {
                    self.emit_paragraph(lines);
                }
            }
            Pending::Paragraph(lines) => self.emit_paragraph(lines),
            Pending::List(items) => self.emit(Block::List {
                items: items.iter().map(|item| parse_inline(item)).collect(),
            }),
        }
    }

    /// Emits the table, or hands its lines back when they do not form one.
    fn finish_table(&mut self, lines: Vec<String>) -> Option<Vec<String>> {
        match table_from_lines(&lines) {
            Some(table) => {
                self.emit(table);
                None
            }
            None => {
                debug!(
                    lines = lines.len(),
                    "pipe lines without a separator row, keeping them as paragraph text"
                );
                Some(lines)
            }
        }
    }

    fn emit_paragraph(&mut self, lines: Vec<String>) {
        let joined = lines.join(" ");
        let text = joined.trim();
        if !text.is_empty() {
            self.emit(Block::Paragraph {
                content: parse_inline(text),
            });
        }
    }

    fn emit(&mut self, block: Block) {
        trace!(block = ?block, "block emitted");
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.close();
        self.blocks
    }
}

fn table_from_lines(lines: &[String]) -> Option<Block> {
    if lines.len() < 2 || !is_separator_row(&lines[1]) {
        return None;
    }
    let headers = parse_table_row(&lines[0])
        .into_iter()
        .map(parse_inline)
        .collect();
    let rows = lines[2..]
        .iter()
        .map(|line| parse_table_row(line))
        .filter(|cells| !cells.is_empty())
        .map(|cells| cells.into_iter().map(parse_inline).collect())
        .collect();
    Some(Block::Table { headers, rows })
}

/// Splits a pipe line into trimmed cells.
///
/// One empty cell is dropped from each end, which removes the optional
/// outer pipes. Cell count is not normalized against the header.
pub fn parse_table_row(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().map_or(false, |cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().map_or(false, |cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

pub fn is_separator_row(line: &str) -> bool {
    let cells = parse_table_row(line);
    !cells.is_empty() && cells.iter().all(|cell| is_separator_cell(cell))
}

// `:?-{2,}:?`
fn parse_separator_cell(i: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char(':')),
        verify(take_while1(|c: char| c == '-'), |dashes: &str| dashes.len() >= 2),
        opt(char(':')),
    )))(i)
}

fn is_separator_cell(cell: &str) -> bool {
    all_consuming(parse_separator_cell)(cell).is_ok()
}

fn parse_link(i: &str) -> IResult<&str, (&str, &str)> {
    pair(
        delimited(tag("["), is_not("]"), tag("]")),
        delimited(tag("("), is_not(")"), tag(")")),
    )(i)
}

/// Splits text around `[label](url)` links.
///
/// The text between links is kept even when empty, so a link at either
/// end or two adjacent links produce empty text nodes.
pub fn parse_inline(text: &str) -> InlineContent {
    let mut nodes = Vec::new();
    let mut start = 0;
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find('[') {
        let at = cursor + offset;
        match parse_link(&text[at..]) {
            Ok((rest, (label, url))) => {
                nodes.push(Inline::text(&text[start..at]));
                nodes.push(Inline::link(label, url));
                start = text.len() - rest.len();
                cursor = start;
            }
            Err(_) => cursor = at + 1,
        }
    }
    nodes.push(Inline::text(&text[start..]));
    nodes
}
