use ego_tree::iter::Edge;
use scraper::{Html, Node};

use super::markers;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Start(Tag),
    End(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl Tag {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, key: &str, value: &str) -> bool {
        self.attr(key) == Some(value)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.has_attr(markers::CLASS, class)
    }

    pub fn href(&self) -> Option<&str> {
        self.attr(markers::HREF)
    }
}

impl Token {
    pub fn start_tag(&self) -> Option<&Tag> {
        match self {
            Token::Start(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// A page flattened into tokens once, then scanned as many times as needed.
///
/// Every element produces a `Start` and a matching `End`, text nodes produce `Text`.
/// Comments and doctypes are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        let html = Html::parse_document(body);
        Document {
            tokens: flatten(&html),
        }
    }

    /// Fresh forward traversal from the start of the document.
    pub fn tokens(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Walks the element tree without recursion, so nesting depth is bounded only by memory.
fn flatten(html: &Html) -> Vec<Token> {
    let mut out = Vec::new();
    for edge in html.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) => out.push(Token::Start(Tag {
                    name: el.name().to_string(),
                    attrs: el
                        .attrs()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                })),
                Node::Text(text) => out.push(Token::Text(text.to_string())),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    out.push(Token::End(el.name().to_string()));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_start_and_end() {
        let doc = Document::parse("<div><p>one<br>two</p><img src=x></div>");
        let starts = doc.tokens().filter(|t| matches!(t, Token::Start(_))).count();
        let ends = doc.tokens().filter(|t| matches!(t, Token::End(_))).count();
        assert_eq!(starts, ends);
    }

    #[test]
    fn attrs_kept_including_empty_values() {
        let doc = Document::parse(r#"<h1 class="">Film</h1>"#);
        let h1 = doc
            .tokens()
            .filter_map(Token::start_tag)
            .find(|t| t.is("h1"))
            .unwrap();
        assert_eq!(h1.attr("class"), Some(""));
        assert!(h1.has_class(""));
    }

    #[test]
    fn text_follows_its_start_tag() {
        let doc = Document::parse("<span itemprop=\"ratingValue\">7.8</span>");
        let mut it = doc.tokens();
        while let Some(tok) = it.next() {
            if tok.start_tag().is_some_and(|t| t.is("span")) {
                assert_eq!(it.next().and_then(Token::text), Some("7.8"));
                return;
            }
        }
        panic!("span not found");
    }

    #[test]
    fn entities_decoded() {
        let doc = Document::parse("<p>Fast &amp; Furious</p>");
        assert!(doc.tokens().any(|t| t.text() == Some("Fast & Furious")));
    }

    #[test]
    fn traversals_are_independent() {
        let doc = Document::parse("<p>a</p>");
        let mut first = doc.tokens();
        first.next();
        first.next();
        assert!(matches!(doc.tokens().next(), Some(Token::Start(t)) if t.is("html")));
        assert_eq!(first.count() + 2, doc.len());
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        const DEPTH: usize = 50_000;
        let body = format!("<html><body>{}x", "<span>".repeat(DEPTH));
        let doc = Document::parse(&body);

        let spans = doc
            .tokens()
            .filter_map(Token::start_tag)
            .filter(|t| t.is("span"))
            .count();
        assert_eq!(spans, DEPTH);
        let ends = doc.tokens().filter(|t| matches!(t, Token::End(n) if n == "span")).count();
        assert_eq!(ends, DEPTH);
        assert!(doc.tokens().any(|t| t.text() == Some("x")));
    }
}
