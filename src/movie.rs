use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Field, Result, ScrapeError};
use crate::fetch::Fetch;
use crate::parser::extract::{cast, directors, genre, rating, recommendations, search, title};
use crate::parser::Document;
use crate::person::Person;
use crate::settings::Settings;

/// A title page and everything scanned out of it.
///
/// `rating` is 0 until resolved. The raw page is fetched at most once and parsed
/// into a single token buffer that every field scan walks from the start.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Movie {
    id: String,
    title: Option<String>,
    rating: f32,
    genre: Vec<String>,
    directors: Vec<Person>,
    cast: Vec<Person>,
    recommendations: Vec<String>,
    #[serde(skip)]
    body: String,
    #[serde(skip)]
    document: Option<Document>,
}

impl Movie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Movie {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Search feature films by name and remember the first hit's id.
    pub fn find_id_by_name(
        &mut self,
        fetcher: &impl Fetch,
        settings: &Settings,
        query: &str,
    ) -> Result<String> {
        let page = fetcher.fetch(&settings.movie_search_url(query))?;
        let id = search::scan(&Document::parse(&page), Field::Movie)?;
        info!("Movie search {:?} -> {}", query, id);
        self.id = id.clone();
        Ok(id)
    }

    /// Fetch the title page (once) and run every field scan in order: rating, title,
    /// recommendations, genre, directors, cast.
    ///
    /// The first failing scan aborts; fields filled before it stay filled. Fields
    /// that already hold a value are skipped. A movie that already holds a
    /// different id refuses with `IdMismatch`.
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
            self.body = fetcher.fetch(&settings.movie_page_url(&self.id))?;
            self.document = None;
        }
        let doc = self
            .document
            .get_or_insert_with(|| Document::parse(&self.body));
        debug!("Movie {} page: {} tokens", self.id, doc.len());

        if self.rating == 0.0 {
            self.rating = rating::scan(doc)?;
        }
        if self.title.is_none() {
            self.title = Some(title::scan(doc)?);
        }
        if self.recommendations.is_empty() {
            self.recommendations = recommendations::scan(doc, &self.id)?;
        }
        if self.genre.is_empty() {
            self.genre = genre::scan(doc)?;
        }
        if self.directors.is_empty() {
            self.directors = directors::scan(doc)?;
        }
        if self.cast.is_empty() {
            self.cast = cast::scan(doc, settings.cast_limit)?;
        }
        info!(
            "Movie {}: {} genres, {} directors, {} cast, {} recommendations",
            self.id,
            self.genre.len(),
            self.directors.len(),
            self.cast.len(),
            self.recommendations.len()
        );
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn genre(&self) -> &[String] {
        &self.genre
    }

    pub fn directors(&self) -> &[Person] {
        &self.directors
    }

    pub fn cast(&self) -> &[Person] {
        &self.cast
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn is_fetched(&self) -> bool {
        !self.body.is_empty()
    }
}
