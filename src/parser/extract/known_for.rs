use tracing::debug;

use crate::error::{Field, Result, ScrapeError};
use crate::parser::ident::extract_id;
use crate::parser::markers;
use crate::parser::tokens::{Document, Tag, Token};

/// Walks `<div id="knownfor">`, counting nested divs so the block's own closing tag
/// ends the scan.
#[derive(Debug, Default)]
pub struct KnownForScanner {
    inside: bool,
    depth: usize,
    done: bool,
    ids: Vec<String>,
}

impl KnownForScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn feed(&mut self, token: &Token) {
        if self.done {
            return;
        }
        match token {
            Token::Start(tag) if tag.is(markers::KNOWN_FOR_TAG) => self.enter(tag),
            Token::Start(tag) if self.inside && tag.is(markers::ANCHOR_TAG) => self.link(tag),
            Token::End(name) if self.inside && name == markers::KNOWN_FOR_TAG => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.inside = false;
                    self.done = true;
                }
            }
            _ => {}
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.ids
    }

    fn enter(&mut self, tag: &Tag) {
        if self.inside {
            self.depth += 1;
        } else if tag.has_attr(markers::ID, markers::KNOWN_FOR_ID) {
            self.inside = true;
            self.depth = 1;
        }
    }

    fn link(&mut self, tag: &Tag) {
        if !tag.has_class(markers::KNOWN_FOR_LINK_CLASS) {
            return;
        }
        match tag.href().map(extract_id) {
            Some(Ok(id)) => self.ids.push(id),
            Some(Err(e)) => debug!("skipping known-for link: {}", e),
            None => {}
        }
    }
}

pub fn scan(doc: &Document) -> Result<Vec<String>> {
    let mut scanner = KnownForScanner::new();
    for token in doc.tokens() {
        scanner.feed(token);
        if scanner.is_done() {
            break;
        }
    }
    let ids = scanner.finish();
    if ids.is_empty() {
        Err(ScrapeError::NotFound(Field::KnownFor))
    } else {
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_FOR: &str = r#"
        <a class="knownfor-ellipsis" href="/title/tt9999999/">Outside before</a>
        <div id="knownfor">
          <div class="knownfor-title">
            <div class="knownfor-title-role">
              <a href="/title/tt0133093/?ref_=nm_knf_t1" class="knownfor-ellipsis">The Matrix</a>
            </div>
          </div>
          <div class="knownfor-title">
            <div class="knownfor-title-role">
              <a href="/title/tt0120737/?ref_=nm_knf_t2" class="knownfor-ellipsis">The Lord of the Rings</a>
              <a href="/title/tt0000001/" class="other">Not this one</a>
            </div>
          </div>
          <div class="knownfor-title">
            <a href="/title/tt0133093/" class="knownfor-ellipsis">The Matrix again</a>
          </div>
        </div>
        <a class="knownfor-ellipsis" href="/title/tt8888888/">Outside after</a>"#;

    #[test]
    fn links_inside_block_only() {
        let doc = Document::parse(KNOWN_FOR);
        assert_eq!(
            scan(&doc).unwrap(),
            vec!["tt0133093", "tt0120737", "tt0133093"]
        );
    }

    #[test]
    fn depth_returns_to_zero() {
        let doc = Document::parse(KNOWN_FOR);
        let mut scanner = KnownForScanner::new();
        for token in doc.tokens() {
            scanner.feed(token);
            if scanner.is_done() {
                break;
            }
        }
        assert!(scanner.is_done());
        assert_eq!(scanner.depth(), 0);
    }

    #[test]
    fn unclosed_block_ends_at_stream_end() {
        let tokens = vec![
            Token::Start(Tag {
                name: "div".into(),
                attrs: vec![("id".into(), "knownfor".into())],
            }),
            Token::Start(Tag { name: "div".into(), attrs: vec![] }),
            Token::Start(Tag {
                name: "a".into(),
                attrs: vec![
                    ("class".into(), "knownfor-ellipsis".into()),
                    ("href".into(), "/title/tt0000042/".into()),
                ],
            }),
            Token::Text("Answer".into()),
            Token::End("a".into()),
        ];
        let mut scanner = KnownForScanner::new();
        for token in &tokens {
            scanner.feed(token);
        }
        assert!(!scanner.is_done());
        assert_eq!(scanner.depth(), 2);
        assert_eq!(scanner.finish(), vec!["tt0000042"]);
    }

    #[test]
    fn missing_block() {
        let doc = Document::parse(r#"<div id="filmography"></div>"#);
        assert!(matches!(scan(&doc), Err(ScrapeError::NotFound(Field::KnownFor))));
    }
}
