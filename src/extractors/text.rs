use crate::extractors::has_image_extension;
use crate::results::{ImageKind, ImageRecord};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static TEXT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{2,256}\.[a-z]{2,4}\b[-a-zA-Z0-9@:%_\+.~#?//=]*",
    )
    .unwrap()
});

/// Absolute image URLs mentioned in the body text
///
/// Matches are kept as written; they are not resolved or normalized.
pub fn text_urls(doc: &Html, _base: &Url) -> Vec<ImageRecord> {
    let text = body_text(doc);
    TEXT_URL
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|url| has_image_extension(url))
        .map(|url| ImageRecord::new(ImageKind::Link, url))
        .collect()
}

/// Text nodes of `<body>`, concatenated without separators
///
/// Inline markup such as `<wbr>` or `<b>` inside a URL leaves the URL intact.
pub fn body_text(doc: &Html) -> String {
    let body = Selector::parse("body").unwrap();
    doc.select(&body).flat_map(|n| n.text()).collect()
}
