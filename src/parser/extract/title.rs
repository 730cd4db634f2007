use crate::error::{Field, Result, ScrapeError};
use crate::parser::markers;
use crate::parser::tokens::{Document, Token};

/// The `<h1 class="">` heading's own text, trimmed.
pub fn scan(doc: &Document) -> Result<String> {
    let mut tokens = doc.tokens();
    while let Some(token) = tokens.next() {
        let Some(tag) = token.start_tag() else {
            continue;
        };
        if !tag.is(markers::TITLE_TAG) || !tag.has_class(markers::TITLE_CLASS) {
            continue;
        }
        if let Some(Token::Text(text)) = tokens.next() {
            return Ok(text.trim().to_string());
        }
    }
    Err(ScrapeError::NotFound(Field::Title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title() {
        let doc = Document::parse(r#"<h1 class="">  Example Film  </h1>"#);
        assert_eq!(scan(&doc).unwrap(), "Example Film");
    }

    #[test]
    fn decorated_heading_skipped() {
        let doc = Document::parse(
            r#"<h1 class="long">Decorated</h1><h1 class="">The Matrix&nbsp;<span id="titleYear">(1999)</span></h1>"#,
        );
        assert_eq!(scan(&doc).unwrap(), "The Matrix");
    }

    #[test]
    fn heading_without_class_skipped() {
        let doc = Document::parse("<h1>No class</h1>");
        assert!(matches!(scan(&doc), Err(ScrapeError::NotFound(Field::Title))));
    }

    #[test]
    fn heading_not_followed_by_text() {
        let doc = Document::parse(r#"<h1 class=""><span>Inner</span></h1>"#);
        assert!(scan(&doc).is_err());
    }
}
