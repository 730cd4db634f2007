use crate::error::{Field, Result, ScrapeError};
use crate::parser::markers;
use crate::parser::tokens::{Document, Token};

/// `<span itemprop="ratingValue">7.8</span>` → 7.8
///
/// Any attribute carrying the sentinel value marks the span. A value that is not a
/// number is a parse error, not a miss.
pub fn scan(doc: &Document) -> Result<f32> {
    let mut tokens = doc.tokens();
    while let Some(token) = tokens.next() {
        let Some(tag) = token.start_tag() else {
            continue;
        };
        if !tag.is(markers::RATING_TAG) || !tag.attrs.iter().any(|(_, v)| v == markers::RATING_VALUE) {
            continue;
        }
        if let Some(Token::Text(text)) = tokens.next() {
            return text.trim().parse::<f32>().map_err(|source| ScrapeError::Parse {
                field: Field::Rating,
                value: text.clone(),
                source,
            });
        }
    }
    Err(ScrapeError::NotFound(Field::Rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rating() {
        let doc = Document::parse(r#"<span itemprop="ratingValue">7.8</span>"#);
        assert_eq!(scan(&doc).unwrap(), 7.8);
    }

    #[test]
    fn non_numeric_is_parse_error() {
        let doc = Document::parse(r#"<span itemprop="ratingValue">n/a</span>"#);
        match scan(&doc) {
            Err(ScrapeError::Parse { field, value, .. }) => {
                assert_eq!(field, Field::Rating);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_rating() {
        let doc = Document::parse(r#"<span itemprop="ratingCount">1,000</span>"#);
        assert!(matches!(scan(&doc), Err(ScrapeError::NotFound(Field::Rating))));
    }

    #[test]
    fn empty_span_keeps_searching() {
        let doc = Document::parse(
            r#"<span itemprop="ratingValue"></span><div><span class="x" itemprop="ratingValue">8.1</span></div>"#,
        );
        assert_eq!(scan(&doc).unwrap(), 8.1);
    }
}
