use tracing::debug;

use crate::error::{Field, Result, ScrapeError};
use crate::parser::ident::extract_id;
use crate::parser::markers;
use crate::parser::tokens::Document;
use crate::person::Person;

use super::labeled;

/// Directors listed under `<h4 class="inline">Director:</h4>`.
///
/// Links without a person/title identifier are dropped.
pub fn scan(doc: &Document) -> Result<Vec<Person>> {
    let links = labeled::collect(doc, markers::DIRECTOR_LABEL)
        .ok_or(ScrapeError::NotFound(Field::Directors))?;

    let directors = links
        .into_iter()
        .filter_map(|link| {
            let href = link.href?;
            match extract_id(&href) {
                Ok(id) => Some(Person::partial(id, link.text)),
                Err(e) => {
                    debug!("skipping director link: {}", e);
                    None
                }
            }
        })
        .collect();
    Ok(directors)
}
