use serde::{Deserialize, Serialize};

pub type InlineContent = Vec<Inline>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading1 { id: String, content: InlineContent },
    Heading2 { id: String, content: InlineContent },
    Paragraph { content: InlineContent },
    List { items: Vec<InlineContent> },
    Table {
        headers: Vec<InlineContent>,
        rows: Vec<Vec<InlineContent>>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Inline {
    Text { value: String },
    Link {
        label: String,
        url: String,
        kind: LinkKind,
    },
}

/// How a host should follow a link, decided by the url prefix alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// `#id`: scroll to the heading with that id.
    Anchor,
    /// `/path`: in-app navigation.
    Internal,
    /// Anything else: open in a new context without opener access.
    External,
}

impl LinkKind {
    pub fn classify(url: &str) -> Self {
        if url.starts_with('#') {
            LinkKind::Anchor
        } else if url.starts_with('/') {
            LinkKind::Internal
        } else {
            LinkKind::External
        }
    }
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text {
            value: value.into(),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Inline::Link {
            label: label.into(),
            kind: LinkKind::classify(&url),
            url,
        }
    }

    /// Heading id an anchor link scrolls to. `None` for other kinds.
    pub fn anchor_target(&self) -> Option<&str> {
        match self {
            Inline::Link {
                url,
                kind: LinkKind::Anchor,
                ..
            } => url.strip_prefix('#'),
            _ => None,
        }
    }

    /// The visible text: the value of a text node, the label of a link.
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text { value } => value,
            Inline::Link { label, .. } => label,
        }
    }
}
