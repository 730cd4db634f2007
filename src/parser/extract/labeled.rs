//! Shared state machine for `<h4 class="inline">Label:</h4>` blocks.
//!
//! ```html
//! <div class="credit_summary_item">
//!   <h4 class="inline">Director:</h4>
//!   <a href="/name/nm0905154/">Lana Wachowski</a>
//! </div>
//! ```
//!
//! The container is the innermost `<div>` open when the heading starts. Links are
//! collected until that exact element closes; nested divs closing earlier do not end
//! the block.

use crate::parser::markers;
use crate::parser::tokens::{Document, Tag, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SeekingHeader,
    /// Heading found, the next token must be the label text.
    ReadingLabel { container: usize },
    Collecting { container: usize },
    /// Inside a link, the next token should be its text.
    AwaitingLinkText { container: usize },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub href: Option<String>,
    pub text: String,
}

#[derive(Debug)]
pub struct LabeledLinks<'a> {
    label: &'a str,
    open: Vec<String>,
    phase: Phase,
    pending_href: Option<String>,
    links: Vec<Link>,
}

impl<'a> LabeledLinks<'a> {
    pub fn new(label: &'a str) -> Self {
        LabeledLinks {
            label,
            open: Vec::new(),
            phase: Phase::SeekingHeader,
            pending_href: None,
            links: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feed(&mut self, token: &Token) {
        match token {
            Token::Start(tag) => {
                self.on_start(tag);
                self.open.push(tag.name.clone());
            }
            Token::End(_) => {
                self.open.pop();
                self.on_end();
            }
            Token::Text(text) => self.on_text(text),
        }
    }

    /// `None` when the labelled heading never appeared.
    pub fn finish(self) -> Option<Vec<Link>> {
        match self.phase {
            Phase::SeekingHeader | Phase::ReadingLabel { .. } => None,
            _ => Some(self.links),
        }
    }

    fn on_start(&mut self, tag: &Tag) {
        match self.phase {
            Phase::ReadingLabel { .. } => {
                self.phase = Phase::SeekingHeader;
                self.seek_header(tag);
            }
            Phase::SeekingHeader => self.seek_header(tag),
            Phase::AwaitingLinkText { container } => {
                self.phase = Phase::Collecting { container };
                self.pending_href = None;
                self.collect_link(tag, container);
            }
            Phase::Collecting { container } => self.collect_link(tag, container),
            Phase::Done => {}
        }
    }

    fn on_end(&mut self) {
        match self.phase {
            Phase::ReadingLabel { .. } => self.phase = Phase::SeekingHeader,
            Phase::Collecting { container } | Phase::AwaitingLinkText { container } => {
                if self.open.len() <= container {
                    self.phase = Phase::Done;
                } else if matches!(self.phase, Phase::AwaitingLinkText { .. }) {
                    self.phase = Phase::Collecting { container };
                    self.pending_href = None;
                }
            }
            Phase::SeekingHeader | Phase::Done => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        match self.phase {
            Phase::ReadingLabel { container } => {
                self.phase = if text == self.label {
                    Phase::Collecting { container }
                } else {
                    Phase::SeekingHeader
                };
            }
            Phase::AwaitingLinkText { container } => {
                self.links.push(Link {
                    href: self.pending_href.take(),
                    text: text.trim().to_string(),
                });
                self.phase = Phase::Collecting { container };
            }
            _ => {}
        }
    }

    fn seek_header(&mut self, tag: &Tag) {
        if tag.is(markers::LABEL_TAG) && tag.has_class(markers::LABEL_CLASS) {
            let container = self
                .open
                .iter()
                .rposition(|name| name == markers::CONTAINER_TAG)
                .unwrap_or(self.open.len().saturating_sub(1));
            self.phase = Phase::ReadingLabel { container };
        }
    }

    fn collect_link(&mut self, tag: &Tag, container: usize) {
        if tag.is(markers::ANCHOR_TAG) {
            self.pending_href = tag.href().map(str::to_string);
            self.phase = Phase::AwaitingLinkText { container };
        }
    }
}

/// Run one traversal of `doc` looking for the block headed by `label`.
pub fn collect(doc: &Document, label: &str) -> Option<Vec<Link>> {
    let mut scanner = LabeledLinks::new(label);
    for token in doc.tokens() {
        scanner.feed(token);
        if scanner.phase() == Phase::Done {
            break;
        }
    }
    scanner.finish()
}
