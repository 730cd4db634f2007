use crate::error::{Field, Result, ScrapeError};
use crate::parser::markers;
use crate::parser::tokens::{Document, Token};

/// Person pages: first non-blank text after `<h1 class="header">`.
pub fn scan(doc: &Document) -> Result<String> {
    let mut in_header = false;
    for token in doc.tokens() {
        match token {
            Token::Start(tag)
                if tag.is(markers::TITLE_TAG) && tag.has_class(markers::PERSON_NAME_CLASS) =>
            {
                in_header = true;
            }
            Token::Text(text) if in_header && !text.trim().is_empty() => {
                return Ok(text.trim().to_string());
            }
            _ => {}
        }
    }
    Err(ScrapeError::NotFound(Field::Name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_inside_span() {
        let doc = Document::parse(
            r#"<h1 class="header"> <span class="itemprop">Keanu Reeves</span></h1>"#,
        );
        assert_eq!(scan(&doc).unwrap(), "Keanu Reeves");
    }

    #[test]
    fn text_before_header_ignored() {
        let doc = Document::parse(r#"<p>Menu</p><h1 class="header">Carrie-Anne Moss</h1>"#);
        assert_eq!(scan(&doc).unwrap(), "Carrie-Anne Moss");
    }

    #[test]
    fn no_header() {
        let doc = Document::parse(r#"<h1 class="">A Film</h1>"#);
        assert!(matches!(scan(&doc), Err(ScrapeError::NotFound(Field::Name))));
    }
}
