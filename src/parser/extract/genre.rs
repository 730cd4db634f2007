use crate::error::{Field, Result, ScrapeError};
use crate::parser::markers;
use crate::parser::tokens::Document;

use super::labeled;

pub fn scan(doc: &Document) -> Result<Vec<String>> {
    let links = labeled::collect(doc, markers::GENRES_LABEL)
        .ok_or(ScrapeError::NotFound(Field::Genre))?;
    Ok(links.into_iter().map(|link| link.text).collect())
}
