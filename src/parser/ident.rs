use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::error::{Result, ScrapeError};

static ID_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(nm|tt)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Person,
    Title,
}

/// Pull the entity identifier out of a link such as `/name/nm0000206/?ref_=x`.
pub fn extract_id(href: &str) -> Result<String> {
    identify(href).map(|(id, _)| id)
}

/// Like [`extract_id`], also reporting whether the link points at a person or a title.
///
/// The identifier is the third `/`-separated segment of the path and must start
/// with `nm` or `tt`. Absolute links are reduced to their path first.
pub fn identify(href: &str) -> Result<(String, IdKind)> {
    let path = link_path(href);
    let segment = path
        .split('/')
        .nth(2)
        .and_then(|s| s.split(['?', '#']).next())
        .unwrap_or_default();

    let caps = ID_PREFIX_RE
        .captures(segment)
        .ok_or_else(|| ScrapeError::NoIdentifier(href.to_string()))?;
    let kind = if &caps[1] == "nm" {
        IdKind::Person
    } else {
        IdKind::Title
    };
    Ok((segment.to_string(), kind))
}

fn link_path(href: &str) -> Cow<'_, str> {
    match Url::parse(href) {
        Ok(url) => Cow::Owned(url.path().to_string()),
        Err(_) => Cow::Borrowed(href),
    }
}
