//! Image extraction heuristics.
//!
//! Each heuristic is a pure pass over a parsed document. [`PASSES`] fixes the
//! order in which they run; the order decides where a source shows up in the
//! deduplicated result.

pub mod shadow;
pub mod style;
pub mod svg;
pub mod tags;
pub mod text;

#[cfg(test)]
mod tests;

use crate::results::{ImageRecord, PageResult};
use scraper::{Html, Selector};
use shadow::ShadowImage;
use std::collections::HashSet;
use url::{Position, Url};

/// File extensions that mark a URL as pointing at an image
pub const IMAGE_EXTENSIONS: [&str; 13] = [
    ".jpg", ".jpeg", ".bmp", ".ico", ".gif", ".png", ".webp", ".svg", ".tif", ".apng", ".jfif",
    ".pjpeg", ".pjp",
];

/// A named heuristic pass over a parsed document
pub struct Pass {
    pub name: &'static str,
    pub scan: fn(&Html, &Url) -> Vec<ImageRecord>,
}

/// Document passes in the order they run. The shadow DOM scan is not listed
/// because its input comes from a rendered browser page, not the document.
pub const PASSES: [Pass; 8] = [
    Pass {
        name: "img",
        scan: tags::img_sources,
    },
    Pass {
        name: "source",
        scan: tags::picture_sources,
    },
    Pass {
        name: "srcset",
        scan: tags::img_srcsets,
    },
    Pass {
        name: "input",
        scan: tags::image_inputs,
    },
    Pass {
        name: "anchor",
        scan: tags::image_links,
    },
    Pass {
        name: "svg",
        scan: svg::inline_svgs,
    },
    Pass {
        name: "style",
        scan: style::backgrounds,
    },
    Pass {
        name: "text",
        scan: text::text_urls,
    },
];

/// Parses `html` and runs every pass, returning the assembled page result
///
/// `shadow_images` is only present for browser-rendered pages.
pub fn extract(html: &str, base: &Url, shadow_images: Option<&[ShadowImage]>) -> PageResult {
    let doc = Html::parse_document(html);

    let mut records = extract_records(&doc, base);
    if let Some(images) = shadow_images {
        let found = shadow::shadow_sources(images, base);
        ::log::debug!("Pass shadow found {} images", found.len());
        records.extend(found);
    }

    let images = dedup_sources(&records);
    ::log::debug!(
        "{} image records, {} unique sources",
        records.len(),
        images.len()
    );

    PageResult::new(images, page_title(&doc), origin(base))
}

/// Runs the document passes in order and collects every record
pub fn extract_records(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let mut records = Vec::new();
    for pass in PASSES.iter() {
        let found = (pass.scan)(doc, base);
        ::log::debug!("Pass {} found {} images", pass.name, found.len());
        records.extend(found);
    }
    records
}

/// Sources with duplicates removed, keeping first occurrences in order
pub fn dedup_sources(records: &[ImageRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.source.as_str()))
        .map(|record| record.source.clone())
        .collect()
}

/// Resolves `src` against `base`, returning `None` when it is not a valid reference
pub fn resolve(base: &Url, src: &str) -> Option<String> {
    match base.join(src) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::debug!("Dropping unresolvable source '{}': {}", src, e);
            None
        }
    }
}

/// Whether `url` ends with an image extension, ignoring case
pub fn has_image_extension(url: &str) -> bool {
    let lower = url.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Text of the document's `<title>`, or an empty string
pub fn page_title(doc: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|title| title.text().collect())
        .unwrap_or_default()
}

/// `scheme://` followed by the authority (user info, host and port) as written
///
/// The URL parser drops a port that equals the scheme's default.
pub fn origin(url: &Url) -> String {
    format!(
        "{}://{}",
        url.scheme(),
        &url[Position::BeforeUsername..Position::AfterPort]
    )
}
