use crate::error::{Field, Result, ScrapeError};
use crate::parser::ident::extract_id;
use crate::parser::markers;
use crate::parser::tokens::Document;

/// First identifier linked after a `<td class="result_text">` marker.
///
/// `missing` names what the caller was searching for, it is the error when no
/// result row holds a usable link.
pub fn scan(doc: &Document, missing: Field) -> Result<String> {
    let mut in_results = false;
    for tag in doc.tokens().filter_map(|t| t.start_tag()) {
        if tag.is(markers::RESULT_ROW_TAG) && tag.has_class(markers::RESULT_ROW_CLASS) {
            in_results = true;
        } else if in_results && tag.is(markers::ANCHOR_TAG) {
            if let Some(Ok(id)) = tag.href().map(extract_id) {
                return Ok(id);
            }
        }
    }
    Err(ScrapeError::NotFound(missing))
}
