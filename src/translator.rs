//! HTML mounting of a parsed document.
//!
//! Each link kind gets the markup a browser host needs to follow it:
//! anchors carry their scroll target, internal links are flagged for
//! in-app navigation, external links open in a new tab without opener
//! or referrer access.

use maud::{html, Markup};

use crate::entity::{Block, Inline, LinkKind};

pub fn translate(blocks: &[Block]) -> String {
    let markup = html! {
        @for block in blocks {
            (render_block(block))
        }
    };
    markup.into_string()
}

fn render_block(block: &Block) -> Markup {
    match block {
        Block::Heading1 { id, content } => html! { h1 id=(id) { (render_inline(content)) } },
        Block::Heading2 { id, content } => html! { h2 id=(id) { (render_inline(content)) } },
        Block::Paragraph { content } => html! { p { (render_inline(content)) } },
        Block::List { items } => html! {
            ul {
                @for item in items {
                    li { (render_inline(item)) }
                }
            }
        },
        Block::Table { headers, rows } => html! {
            table {
                thead {
                    tr {
                        @for header in headers {
                            th { (render_inline(header)) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            @for cell in row {
                                td { (render_inline(cell)) }
                            }
                        }
                    }
                }
            }
        },
    }
}

fn render_inline(content: &[Inline]) -> Markup {
    html! {
        @for node in content {
            (render_node(node))
        }
    }
}

fn render_node(node: &Inline) -> Markup {
    match node {
        Inline::Text { value } => html! { (value) },
        Inline::Link { label, url, kind } => match kind {
            LinkKind::Anchor => {
                let target = url.strip_prefix('#').unwrap_or(url);
                html! { a href=(url) data-scroll-target=(target) { (label) } }
            }
            LinkKind::Internal => html! { a href=(url) data-internal="true" { (label) } },
            LinkKind::External => html! {
                a href=(url) target="_blank" rel="noopener noreferrer" { (label) }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::parser;
    use crate::translator;

    macro_rules! assert_convert {
        ($markdown:expr, $html:expr) => {
            assert_eq!(
                translator::translate(&parser::parse_document($markdown)),
                String::from($html)
            );
        };
    }

    #[test]
    fn test_convert_blocks() {
        assert_convert!("# h1\n", r#"<h1 id="h1">h1</h1>"#);
        assert_convert!("## h2\n", r#"<h2 id="h2">h2</h2>"#);
        assert_convert!("- a\n- b\n- c\n", "<ul><li>a</li><li>b</li><li>c</li></ul>");
        assert_convert!("one\ntwo\n\nthree", "<p>one two</p><p>three</p>");
        assert_convert!(
            "| A | B |\n|---|---|\n| 1 | 2 |",
            "<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
        assert_convert!(
            "| A |\n|---|",
            "<table><thead><tr><th>A</th></tr></thead><tbody></tbody></table>"
        );
        assert_convert!("", "");
    }

    #[test]
    fn test_convert_links() {
        assert_convert!(
            "[Top](#top)",
            r##"<p><a href="#top" data-scroll-target="top">Top</a></p>"##
        );
        assert_convert!(
            "[Docs](/docs)",
            r#"<p><a href="/docs" data-internal="true">Docs</a></p>"#
        );
        assert_convert!(
            "go [Ext](https://example.com) now",
            r#"<p>go <a href="https://example.com" target="_blank" rel="noopener noreferrer">Ext</a> now</p>"#
        );
    }

    #[test]
    fn test_convert_escapes() {
        assert_convert!("a <b> & c", "<p>a &lt;b&gt; &amp; c</p>");
        assert_convert!(
            r#"[x](https://e.com/?q="1"&r=2)"#,
            r#"<p><a href="https://e.com/?q=&quot;1&quot;&amp;r=2" target="_blank" rel="noopener noreferrer">x</a></p>"#
        );
    }
}
