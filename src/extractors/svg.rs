use crate::results::{ImageKind, ImageRecord};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use scraper::{Html, Selector};
use url::Url;

/// Inline `<svg>` elements, serialized and embedded as data URLs
pub fn inline_svgs(doc: &Html, _base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("svg").unwrap();
    doc.select(&selector)
        .map(|svg| ImageRecord::new(ImageKind::DataUrl, svg_data_url(&svg.html())))
        .collect()
}

/// Wraps SVG markup in a base64 `data:` URL
pub fn svg_data_url(markup: &str) -> String {
    format!("data:image/svg+xml;base64,{}", BASE64.encode(markup))
}
