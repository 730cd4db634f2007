//! Tag names, class names and labels the scanners look for.
//!
//! Everything that depends on the site's current layout lives here.

/// Search results: `<td class="result_text"><a href="/title/tt.../">`.
pub const RESULT_ROW_CLASS: &str = "result_text";
pub const RESULT_ROW_TAG: &str = "td";

/// Primary title heading is the `<h1 class="">` without decoration.
pub const TITLE_TAG: &str = "h1";
pub const TITLE_CLASS: &str = "";

/// `<span itemprop="ratingValue">7.8</span>`
pub const RATING_TAG: &str = "span";
pub const RATING_VALUE: &str = "ratingValue";

/// `<h4 class="inline">Genres:</h4>` and friends.
pub const LABEL_TAG: &str = "h4";
pub const LABEL_CLASS: &str = "inline";
pub const GENRES_LABEL: &str = "Genres:";
pub const DIRECTOR_LABEL: &str = "Director:";
pub const CONTAINER_TAG: &str = "div";

pub const CAST_TABLE_TAG: &str = "table";
pub const CAST_TABLE_CLASS: &str = "cast_list";
pub const CAST_CELL_TAG: &str = "td";

pub const RECOMMENDATION_TAG: &str = "div";
pub const RECOMMENDATION_ATTR: &str = "data-tconst";

pub const PERSON_NAME_CLASS: &str = "header";

/// `<div id="knownfor">` holding `<a class="knownfor-ellipsis">` links.
pub const KNOWN_FOR_TAG: &str = "div";
pub const KNOWN_FOR_ID: &str = "knownfor";
pub const KNOWN_FOR_LINK_CLASS: &str = "knownfor-ellipsis";

pub const ANCHOR_TAG: &str = "a";
pub const HREF: &str = "href";
pub const CLASS: &str = "class";
pub const ID: &str = "id";
