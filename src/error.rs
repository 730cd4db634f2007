use std::fmt;
use std::num::ParseFloatError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Which piece of a page a scan was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Rating,
    Genre,
    Directors,
    Cast,
    Recommendations,
    Name,
    KnownFor,
    Movie,
    Person,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Title => "title",
            Field::Rating => "rating",
            Field::Genre => "genres",
            Field::Directors => "directors",
            Field::Cast => "cast",
            Field::Recommendations => "recommendations",
            Field::Name => "name",
            Field::KnownFor => "known for",
            Field::Movie => "movie",
            Field::Person => "person",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not find {0}")]
    NotFound(Field),

    #[error("could not parse {field} from {value:?}: {source}")]
    Parse {
        field: Field,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no identifier in link {0:?}")]
    NoIdentifier(String),

    #[error("already bound to {held}, cannot fetch {requested}")]
    IdMismatch { held: String, requested: String },
}

impl ScrapeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::NotFound(_))
    }
}
