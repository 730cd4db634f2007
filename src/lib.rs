//! Movie and person records scraped from IMDb title and name pages.
//!
//! Pages are fetched through a [`Fetch`] implementation, parsed once into a token
//! buffer, and scanned field by field.

pub mod error;
pub mod fetch;
pub mod movie;
pub mod parser;
pub mod person;
pub mod settings;

pub use error::{Field, Result, ScrapeError};
pub use fetch::{Fetch, HttpFetcher};
pub use movie::Movie;
pub use person::Person;
pub use settings::Settings;
