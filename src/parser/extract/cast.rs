//! Cast table:
//!
//! ```html
//! <table class="cast_list">
//!   <tr class="odd">
//!     <td class="primary_photo"><a href="/name/nm0000206/"><img ...></a></td>
//!     <td><a href="/name/nm0000206/"> Keanu Reeves</a></td>
//!     <td class="character">Neo</td>
//!   </tr>
//! </table>
//! ```
//!
//! Only the bare `<td>` holds the name link; the photo cell carries a class and is
//! skipped even though it links to the same person.

use crate::error::Result;
use crate::parser::ident::extract_id;
use crate::parser::markers;
use crate::parser::tokens::{Document, Tag, Token};
use crate::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastState {
    SeekingTable,
    InTable { table: usize },
    InCell { table: usize, cell: usize },
    AwaitingName { table: usize, cell: usize, id: String },
}

#[derive(Debug)]
pub struct CastScanner {
    limit: usize,
    depth: usize,
    state: CastState,
    members: Vec<Person>,
}

impl CastScanner {
    pub fn new(limit: usize) -> Self {
        CastScanner {
            limit,
            depth: 0,
            state: CastState::SeekingTable,
            members: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn state(&self) -> &CastState {
        &self.state
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.limit
    }

    pub fn feed(&mut self, token: &Token) {
        if self.is_full() {
            return;
        }
        match token {
            Token::Start(tag) => {
                self.depth += 1;
                self.on_start(tag);
            }
            Token::End(_) => {
                self.on_end();
                self.depth = self.depth.saturating_sub(1);
            }
            Token::Text(text) => self.on_text(text),
        }
    }

    pub fn finish(self) -> Vec<Person> {
        self.members
    }

    fn on_start(&mut self, tag: &Tag) {
        let depth = self.depth;
        match &self.state {
            CastState::SeekingTable => {
                if tag.is(markers::CAST_TABLE_TAG) && tag.has_class(markers::CAST_TABLE_CLASS) {
                    self.state = CastState::InTable { table: depth };
                }
            }
            CastState::InTable { table } => {
                if tag.is(markers::CAST_CELL_TAG) && tag.attrs.is_empty() {
                    self.state = CastState::InCell {
                        table: *table,
                        cell: depth,
                    };
                }
            }
            CastState::InCell { table, cell } => {
                if !tag.is(markers::ANCHOR_TAG) {
                    return;
                }
                if let Some(id) = tag.href().and_then(|href| extract_id(href).ok()) {
                    self.state = CastState::AwaitingName {
                        table: *table,
                        cell: *cell,
                        id,
                    };
                }
            }
            CastState::AwaitingName { .. } => {}
        }
    }

    /// Called before the depth drops, so `self.depth` is the closing element's depth.
    fn on_end(&mut self) {
        let depth = self.depth;
        match &self.state {
            CastState::InCell { table, cell } | CastState::AwaitingName { table, cell, .. }
                if *cell == depth =>
            {
                self.state = CastState::InTable { table: *table };
            }
            CastState::InTable { table } if *table == depth => {
                self.state = CastState::SeekingTable;
            }
            _ => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        if self.depth == 0 || text.trim().is_empty() {
            return;
        }
        if let CastState::AwaitingName { table, id, .. } = &self.state {
            self.members
                .push(Person::partial(id.clone(), text.trim().to_string()));
            self.state = CastState::InTable { table: *table };
        }
    }
}

/// At most `limit` cast members in billing order. Zero matches is not an error.
pub fn scan(doc: &Document, limit: usize) -> Result<Vec<Person>> {
    let mut scanner = CastScanner::new(limit);
    for token in doc.tokens() {
        if scanner.is_full() {
            break;
        }
        scanner.feed(token);
    }
    Ok(scanner.finish())
}
