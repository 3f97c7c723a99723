use crate::extractors::resolve;
use crate::results::{ImageKind, ImageRecord};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static CSS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(["']?([^"')]+)["']?\)"#).unwrap());

/// `url(...)` references in inline `style` attributes
///
/// Any property is matched, so `background`, `background-image` and even
/// `cursor` contribute.
pub fn backgrounds(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("[style]").unwrap();
    doc.select(&selector)
        .filter_map(|element| element.value().attr("style"))
        .flat_map(style_urls)
        .filter_map(|src| resolve(base, src))
        .map(|src| ImageRecord::new(ImageKind::Background, src))
        .collect()
}

/// Raw URLs inside `url(...)` in a style declaration
pub fn style_urls(style: &str) -> impl Iterator<Item = &str> {
    CSS_URL
        .captures_iter(style)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
