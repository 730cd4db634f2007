use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Field, Result, ScrapeError};
use crate::fetch::Fetch;
use crate::parser::extract::{known_for, name, search};
use crate::parser::Document;
use crate::settings::Settings;

/// A person page. Directors and cast members of a [`Movie`](crate::Movie) are
/// partial persons: id and name only, never fetched on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Person {
    id: String,
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    known_for: Vec<String>,
    #[serde(skip)]
    body: String,
    #[serde(skip)]
    document: Option<Document>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Person {
            id: id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn partial(id: String, name: String) -> Self {
        Person {
            id,
            name: Some(name),
            ..Self::default()
        }
    }

    /// Search by name and remember the first hit's id. The search page is not kept.
    pub fn find_id_by_name(
        &mut self,
        fetcher: &impl Fetch,
        settings: &Settings,
        query: &str,
    ) -> Result<String> {
        let page = fetcher.fetch(&settings.person_search_url(query))?;
        let id = search::scan(&Document::parse(&page), Field::Person)?;
        info!("Person search {:?} -> {}", query, id);
        self.id = id.clone();
        Ok(id)
    }

    /// Fetch the person page (once) and fill name and known-for.
    ///
    /// Fields that already hold a value are not scanned again. On error the fields
    /// filled before the failing scan keep their values. A person that already
    /// holds a different id refuses with `IdMismatch`.
    pub fn fetch_by_id(&mut self, fetcher: &impl Fetch, settings: &Settings, id: &str) -> Result<()> {
        if self.id.is_empty() {
            self.id = id.to_string();
        } else if self.id != id {
            return Err(ScrapeError::IdMismatch {
                held: self.id.clone(),
                requested: id.to_string(),
            });
        }
        if self.body.is_empty() {
            self.body = fetcher.fetch(&settings.person_page_url(&self.id))?;
            self.document = None;
        }
        let doc = self
            .document
            .get_or_insert_with(|| Document::parse(&self.body));
        debug!("Person {} page: {} tokens", self.id, doc.len());

        if self.name.is_none() {
            self.name = Some(name::scan(doc)?);
        }
        if self.known_for.is_empty() {
            self.known_for = known_for::scan(doc)?;
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn known_for(&self) -> &[String] {
        &self.known_for
    }

    pub fn is_fetched(&self) -> bool {
        !self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Canned {
        body: &'static str,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(body: &'static str) -> Self {
            Canned { body, calls: Cell::new(0) }
        }
    }

    impl Fetch for Canned {
        fn fetch(&self, _url: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.body.to_string())
        }
    }

    const PAGE: &str = r#"<html><body>
        <h1 class="header"><span class="itemprop">Keanu Reeves</span></h1>
        <div id="knownfor"><div class="knownfor-title">
          <a class="knownfor-ellipsis" href="/title/tt0133093/">The Matrix</a>
        </div></div>
        </body></html>"#;

    #[test]
    fn fetches_name_and_known_for() {
        let fetcher = Canned::new(PAGE);
        let mut person = Person::new();
        person.fetch_by_id(&fetcher, &Settings::default(), "nm0000206").unwrap();
        assert_eq!(person.id(), "nm0000206");
        assert_eq!(person.name(), "Keanu Reeves");
        assert_eq!(person.known_for(), ["tt0133093".to_string()]);
    }

    #[test]
    fn body_fetched_once() {
        let fetcher = Canned::new(PAGE);
        let mut person = Person::new();
        let settings = Settings::default();
        person.fetch_by_id(&fetcher, &settings, "nm0000206").unwrap();
        person.fetch_by_id(&fetcher, &settings, "nm0000206").unwrap();
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn name_kept_when_known_for_missing() {
        let fetcher = Canned::new(r#"<h1 class="header">Someone</h1>"#);
        let mut person = Person::new();
        let err = person
            .fetch_by_id(&fetcher, &Settings::default(), "nm1")
            .unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(Field::KnownFor)));
        assert_eq!(person.name(), "Someone");
        assert!(person.known_for().is_empty());
    }

    #[test]
    fn different_id_refused_without_fetching() {
        let fetcher = Canned::new(PAGE);
        let mut person = Person::with_id("nm0000001");
        let err = person
            .fetch_by_id(&fetcher, &Settings::default(), "nm0000002")
            .unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::IdMismatch { ref held, ref requested }
                if held == "nm0000001" && requested == "nm0000002"
        ));
        assert_eq!(fetcher.calls.get(), 0);
        assert_eq!(person.id(), "nm0000001");
        assert!(!person.is_fetched());
    }

    #[test]
    fn search_sets_id() {
        let fetcher = Canned::new(
            r#"<table><tr><td class="result_text"><a href="/name/nm0000206/">Keanu Reeves</a></td></tr></table>"#,
        );
        let mut person = Person::new();
        let id = person
            .find_id_by_name(&fetcher, &Settings::default(), "Keanu Reeves")
            .unwrap();
        assert_eq!(id, "nm0000206");
        assert_eq!(person.id(), "nm0000206");
        assert!(!person.is_fetched());
    }

    #[test]
    fn unpopulated_accessors_are_empty() {
        let person = Person::with_id("nm1");
        assert_eq!(person.name(), "");
        assert!(person.known_for().is_empty());
    }
}
