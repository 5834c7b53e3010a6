//! Inline content: text, ruby glosses, styled tokens and fill-in blanks.
//!
//! The data file describes inline content with loosely shaped JSON objects
//! (`{"t": ...}`, `{"ruby": ...}`, `{"token": ...}`, `{"blank": ...}` or a
//! bare string). Decoding goes through [`RawInline`] and lands in the closed
//! [`InlineNode`] enum, so every consumer dispatches with a `match` and an
//! object that fits none of the shapes is a decode error instead of being
//! dropped on the floor.

use serde::Deserialize;

/// One piece of inline content, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawInline")]
pub enum InlineNode {
    /// Literal text.
    Text(String),
    /// Base text with a phonetic reading rendered above it.
    Gloss { base: String, reading: String },
    /// A span tagged with a semantic token id; its style class is resolved
    /// through a [`ClassLookup`](crate::style::ClassLookup).
    Token { id: String, body: TokenBody },
    /// An interactive fill-in point.
    Blank(Blank),
}

/// Content of a token span.
///
/// Tokens carry plain text or a gloss only, so a token wrapping a blank
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenBody {
    Text(String),
    Gloss { base: String, reading: String },
}

/// A fill-in blank whose answer is itself inline content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blank {
    /// Token id used to resolve a style class for the answer.
    pub id: Option<String>,
    /// The concealed answer, rendered with the same rules as its parent.
    pub answer: Vec<InlineNode>,
    /// Extra class applied to the answer wrapper.
    pub answer_class: Option<String>,
}

impl InlineNode {
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Text(value.into())
    }

    pub fn gloss(base: impl Into<String>, reading: impl Into<String>) -> Self {
        InlineNode::Gloss {
            base: base.into(),
            reading: reading.into(),
        }
    }

    pub fn token(id: impl Into<String>, body: TokenBody) -> Self {
        InlineNode::Token {
            id: id.into(),
            body,
        }
    }

    pub fn blank(answer: Vec<InlineNode>) -> Self {
        InlineNode::Blank(Blank {
            answer,
            ..Blank::default()
        })
    }

    /// Concatenate every text and gloss base in reading order, answers
    /// included. Readings are skipped.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        collect_plain(nodes, &mut out);
        out
    }
}

fn collect_plain(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(value) => out.push_str(value),
            InlineNode::Gloss { base, .. } => out.push_str(base),
            InlineNode::Token { body, .. } => match body {
                TokenBody::Text(value) => out.push_str(value),
                TokenBody::Gloss { base, .. } => out.push_str(base),
            },
            InlineNode::Blank(blank) => collect_plain(&blank.answer, out),
        }
    }
}

impl Blank {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_answer_class(mut self, class: impl Into<String>) -> Self {
        self.answer_class = Some(class.into());
        self
    }
}

// ----------------------------------------------------------------------------
// JSON decoding
// ----------------------------------------------------------------------------

/// Wire shape of an inline part as it appears in the data file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawInline {
    Plain(String),
    Shaped(RawShape),
}

/// Object form of an inline part. Several keys may co-exist; precedence is
/// `blank`, then `token`, then `ruby`, then `t`.
#[derive(Debug, Default, Deserialize)]
pub struct RawShape {
    #[serde(default, deserialize_with = "present_or_null")]
    t: Option<Option<String>>,
    #[serde(default)]
    ruby: Option<RawGloss>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    blank: Option<RawBlank>,
}

#[derive(Debug, Default, Deserialize)]
struct RawGloss {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    rt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBlank {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    answer: Option<Vec<InlineNode>>,
    #[serde(default, rename = "answerWrapClass")]
    answer_wrap_class: Option<String>,
}

/// Distinguish `"t": null` (present, empty) from a missing `t` key.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TryFrom<RawInline> for InlineNode {
    type Error = String;

    fn try_from(raw: RawInline) -> Result<Self, Self::Error> {
        let shape = match raw {
            RawInline::Plain(value) => return Ok(InlineNode::Text(value)),
            RawInline::Shaped(shape) => shape,
        };

        if let Some(blank) = shape.blank {
            return Ok(InlineNode::Blank(Blank {
                id: blank.id.filter(|id| !id.is_empty()),
                answer: blank.answer.unwrap_or_default(),
                answer_class: blank.answer_wrap_class.filter(|c| !c.is_empty()),
            }));
        }

        if let Some(id) = shape.token {
            let body = match shape.ruby {
                Some(gloss) => TokenBody::Gloss {
                    base: gloss.base.unwrap_or_default(),
                    reading: gloss.rt.unwrap_or_default(),
                },
                None => TokenBody::Text(shape.t.flatten().unwrap_or_default()),
            };
            return Ok(InlineNode::Token { id, body });
        }

        if let Some(gloss) = shape.ruby {
            return Ok(InlineNode::Gloss {
                base: gloss.base.unwrap_or_default(),
                reading: gloss.rt.unwrap_or_default(),
            });
        }

        match shape.t {
            Some(value) => Ok(InlineNode::Text(value.unwrap_or_default())),
            None => Err(
                "inline part must be a string or an object with one of `t`, `ruby`, `token`, `blank`"
                    .to_string(),
            ),
        }
    }
}
