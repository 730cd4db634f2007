use std::collections::HashSet;

use crate::error::{Field, Result, ScrapeError};
use crate::parser::markers;
use crate::parser::tokens::Document;

/// Title ids from `<div data-tconst="tt...">` cards, first occurrence wins.
/// The page's own id is never recommended.
pub fn scan(doc: &Document, own_id: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut recommendations = Vec::new();

    for tag in doc.tokens().filter_map(|t| t.start_tag()) {
        if !tag.is(markers::RECOMMENDATION_TAG) {
            continue;
        }
        let Some(tconst) = tag.attr(markers::RECOMMENDATION_ATTR) else {
            continue;
        };
        if tconst == own_id || !seen.insert(tconst) {
            continue;
        }
        recommendations.push(tconst.to_string());
    }

    if recommendations.is_empty() {
        Err(ScrapeError::NotFound(Field::Recommendations))
    } else {
        Ok(recommendations)
    }
}
