use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_SEARCH_URL: &str = "https://www.imdb.com/find";
pub const DEFAULT_TITLE_URL: &str = "https://www.imdb.com/title/";
pub const DEFAULT_NAME_URL: &str = "https://www.imdb.com/name/";
pub const DEFAULT_CAST_LIMIT: usize = 5;
const DEFAULT_USER_AGENT: &str = concat!("imdb_scraper/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and limits. Every key can be overridden with an `IMDB_` variable,
/// e.g. `IMDB_CAST_LIMIT=10` or `IMDB_TITLE_URL=http://localhost:8080/title/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub search_url: String,
    pub title_url: String,
    pub name_url: String,
    pub cast_limit: usize,
    pub user_agent: String,
    /// 0 disables the request timeout.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            title_url: DEFAULT_TITLE_URL.to_string(),
            name_url: DEFAULT_NAME_URL.to_string(),
            cast_limit: DEFAULT_CAST_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("search_url", defaults.search_url)?
            .set_default("title_url", defaults.title_url)?
            .set_default("name_url", defaults.name_url)?
            .set_default("cast_limit", defaults.cast_limit as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .add_source(Environment::with_prefix("IMDB").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn movie_search_url(&self, name: &str) -> String {
        format!("{}?s=tt&ttype=ft&q={}", self.search_url, encode_query(name))
    }

    pub fn person_search_url(&self, name: &str) -> String {
        format!("{}?s=nm&q={}", self.search_url, encode_query(name))
    }

    pub fn movie_page_url(&self, id: &str) -> String {
        format!("{}{}", self.title_url, id)
    }

    pub fn person_page_url(&self, id: &str) -> String {
        format!("{}{}", self.name_url, id)
    }
}

fn encode_query(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.trim().as_bytes()).collect()
}
